use clap::Args;
use serde_json::Value;

use mortgage_core::quote::{self, RequestOutcome};
use mortgage_core::validation::{self, RawMortgageRequest, ValidationErrors};
use mortgage_core::PaymentSchedule;

use crate::input;

/// Loan fields shared by the payment and validate commands. Values are
/// passed through as raw text; the engine owns parsing and validation.
#[derive(Args)]
pub struct LoanFields {
    /// Property price in dollars
    #[arg(long)]
    pub property_price: Option<String>,

    /// Down payment in dollars
    #[arg(long)]
    pub down_payment: Option<String>,

    /// Annual interest rate as a percentage (e.g. 5 for 5%)
    #[arg(long)]
    pub interest_rate: Option<String>,

    /// Amortization period in years
    #[arg(long)]
    pub amortization_period: Option<String>,

    /// Payment schedule: Monthly, Bi-Weekly, or Accelerated Bi-Weekly
    #[arg(long)]
    pub payment_schedule: Option<String>,

    /// Path to a JSON request file (used when no field flags are given)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the payment command
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub fields: LoanFields,
}

/// Arguments for the validate command
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: LoanFields,
}

/// Arguments for the schedules command
#[derive(Args)]
pub struct SchedulesArgs {}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.fields)?;
    match quote::process_request(&request)? {
        RequestOutcome::Quote(output) => Ok(serde_json::to_value(output)?),
        RequestOutcome::Rejected(errors) => Err(format_rejection(&errors).into()),
    }
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.fields)?;
    let errors = validation::validate_request(&request);
    Ok(serde_json::to_value(errors)?)
}

pub fn run_schedules(_args: SchedulesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedules: Vec<Value> = [
        PaymentSchedule::Monthly,
        PaymentSchedule::BiWeekly,
        PaymentSchedule::AcceleratedBiWeekly,
    ]
    .into_iter()
    .map(|s| {
        serde_json::json!({
            "paymentSchedule": s.to_string(),
            "periodsPerYear": s.periods_per_year(),
        })
    })
    .collect();
    Ok(Value::Array(schedules))
}

/// Build the raw request from field flags, a JSON file, or piped stdin,
/// in that order of preference.
fn resolve_request(fields: &LoanFields) -> Result<RawMortgageRequest, Box<dyn std::error::Error>> {
    let has_flags = fields.property_price.is_some()
        || fields.down_payment.is_some()
        || fields.interest_rate.is_some()
        || fields.amortization_period.is_some()
        || fields.payment_schedule.is_some();

    if has_flags {
        return Ok(RawMortgageRequest {
            property_price: fields.property_price.clone(),
            down_payment: fields.down_payment.clone(),
            interest_rate: fields.interest_rate.clone(),
            amortization_period: fields.amortization_period.clone(),
            payment_schedule: fields.payment_schedule.clone(),
        });
    }

    if let Some(ref path) = fields.input {
        return input::file::read_json(path);
    }

    if let Some(request) = input::stdin::read_stdin()? {
        return Ok(request);
    }

    Err("provide loan fields via flags, --input <file.json>, or piped stdin".into())
}

/// One line per failing field, in field-check order.
fn format_rejection(errors: &ValidationErrors) -> String {
    let mut lines = vec!["invalid loan request".to_string()];
    for message in errors.messages() {
        lines.push(format!("  {message}"));
    }
    lines.join("\n")
}
