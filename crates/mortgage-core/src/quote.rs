//! Quote orchestration: from validated numeric inputs to a fully derived
//! payment breakdown, and from a raw request to a quote-or-rejection outcome.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::conversion;
use crate::error::MortgageError;
use crate::insurance;
use crate::payment;
use crate::types::{with_metadata, ComputationOutput, Money, PaymentSchedule, Rate, Years};
use crate::validation::{self, RawMortgageRequest, ValidationErrors};
use crate::MortgageResult;

/// Validated numeric inputs for one quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageQuoteInput {
    pub property_price: Money,
    pub down_payment: Money,
    /// Annual interest rate as a percentage (5 = 5%).
    pub annual_interest_rate: Rate,
    /// Amortization period in years.
    pub amortization_years: Years,
    /// Schedule name as submitted. Parsed here rather than upstream, so a
    /// value that slipped past the presence check still fails loudly.
    pub payment_schedule: String,
}

/// A fully derived payment breakdown. Immutable snapshot, request-scoped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageQuote {
    /// Amount due once per schedule period.
    pub periodic_payment: Money,
    /// Principal actually financed, including any insurance premium.
    pub total_mortgage_amount: Money,
    pub insurance_required: bool,
    /// Premium tier rate; zero when insurance is not required.
    pub insurance_rate: Rate,
    /// Premium amount; zero when insurance is not required.
    pub insurance_premium: Money,
    /// Interest rate per payment period, as a decimal.
    pub per_period_rate: Rate,
    /// Annual interest rate converted to a decimal.
    pub annual_rate_decimal: Rate,
    pub total_payments: Decimal,
    pub periods_per_year: u32,
    pub down_payment_percentage: Decimal,
    pub down_payment: Money,
    pub property_price: Money,
    pub payment_schedule: PaymentSchedule,
}

/// Outcome of one raw request: a computed quote, or the per-field errors
/// that rejected it. Serializes untagged so callers see either the quote
/// envelope or the error record, exactly as the wire contract expects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestOutcome {
    Quote(Box<ComputationOutput<MortgageQuote>>),
    Rejected(ValidationErrors),
}

/// Compute a payment quote from validated numeric inputs.
///
/// Pipeline: schedule -> per-period rate and payment count -> insurance
/// decision and premium -> annuity payment on the adjusted principal.
/// Pure and deterministic; identical inputs yield identical quotes.
pub fn calculate_payment(
    input: &MortgageQuoteInput,
) -> MortgageResult<ComputationOutput<MortgageQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = PaymentSchedule::from_str(&input.payment_schedule)?;
    let periods_per_year = schedule.periods_per_year();

    let annual_rate_decimal = conversion::percent_to_decimal(input.annual_interest_rate);
    let per_period_rate = conversion::per_period_rate(annual_rate_decimal, periods_per_year)?;
    let total_payments = conversion::total_payments(periods_per_year, input.amortization_years);

    if annual_rate_decimal.is_zero() {
        warnings.push("Interest rate is zero: payment is straight-line amortization".into());
    }

    let down_payment_percentage =
        conversion::down_payment_percentage(input.property_price, input.down_payment)?;
    let insurance_required =
        insurance::is_insurance_required(input.property_price, input.down_payment);

    let principal_before_insurance = input.property_price - input.down_payment;
    let mut total_mortgage_amount = principal_before_insurance;
    let mut insurance_rate: Rate = Decimal::ZERO;
    let mut insurance_premium: Money = Decimal::ZERO;

    if insurance_required {
        insurance_rate = insurance::premium_rate(down_payment_percentage);
        insurance_premium =
            insurance::insurance_premium(insurance_rate, principal_before_insurance);
        total_mortgage_amount =
            insurance::apply_premium(total_mortgage_amount, insurance_premium);
    }

    let periodic_payment =
        payment::periodic_payment(total_mortgage_amount, total_payments, per_period_rate)?;

    let quote = MortgageQuote {
        periodic_payment,
        total_mortgage_amount,
        insurance_required,
        insurance_rate,
        insurance_premium,
        per_period_rate,
        annual_rate_decimal,
        total_payments,
        periods_per_year,
        down_payment_percentage,
        down_payment: input.down_payment,
        property_price: input.property_price,
        payment_schedule: schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Payment Annuity with CMHC Premium Tiers",
        &serde_json::json!({
            "payment_schedule": schedule.to_string(),
            "periods_per_year": periods_per_year,
            "amortization_years": input.amortization_years.to_string(),
            "insurance_required": insurance_required,
        }),
        warnings,
        elapsed,
        quote,
    ))
}

/// Process one raw request end to end: validate, then either reject with
/// per-field messages or compute the quote. An unknown schedule value that
/// passed the presence check surfaces as an `Err`, not a rejection.
pub fn process_request(request: &RawMortgageRequest) -> MortgageResult<RequestOutcome> {
    let errors = validation::validate_request(request);
    if !errors.is_valid() {
        return Ok(RequestOutcome::Rejected(errors));
    }

    let input = MortgageQuoteInput {
        property_price: require_numeric(request.property_price.as_ref(), "propertyPrice")?,
        down_payment: require_numeric(request.down_payment.as_ref(), "downPayment")?,
        annual_interest_rate: require_numeric(request.interest_rate.as_ref(), "interestRate")?,
        amortization_years: require_numeric(
            request.amortization_period.as_ref(),
            "amortizationPeriod",
        )?,
        payment_schedule: request
            .payment_schedule
            .clone()
            .ok_or_else(|| MortgageError::InvalidInput {
                field: "paymentSchedule".into(),
                reason: "Payment schedule is required".into(),
            })?,
    };

    let output = calculate_payment(&input)?;
    Ok(RequestOutcome::Quote(Box::new(output)))
}

/// Re-parse a validated field. Validation guarantees the numeric fields
/// parse, except the amortization period which is checked for presence
/// only; a non-numeric value there is a structural error.
fn require_numeric(raw: Option<&String>, field: &str) -> MortgageResult<Decimal> {
    validation::parse_decimal(raw).ok_or_else(|| MortgageError::InvalidInput {
        field: field.into(),
        reason: "Expected a numeric value".into(),
    })
}
