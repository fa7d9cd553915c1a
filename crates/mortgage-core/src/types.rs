use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MortgageError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%) unless a field says otherwise.
pub type Rate = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// Payment frequency. Closed set: adding a schedule is a compile-time change,
/// never a silent default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentSchedule {
    Monthly,
    #[serde(rename = "Bi-Weekly")]
    BiWeekly,
    #[serde(rename = "Accelerated Bi-Weekly")]
    AcceleratedBiWeekly,
}

impl PaymentSchedule {
    /// Number of payment periods per year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentSchedule::Monthly => 12,
            PaymentSchedule::BiWeekly => 26,
            PaymentSchedule::AcceleratedBiWeekly => 27,
        }
    }

    /// Wire name, as it appears in request and response JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentSchedule::Monthly => "Monthly",
            PaymentSchedule::BiWeekly => "Bi-Weekly",
            PaymentSchedule::AcceleratedBiWeekly => "Accelerated Bi-Weekly",
        }
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentSchedule {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monthly" => Ok(PaymentSchedule::Monthly),
            "Bi-Weekly" => Ok(PaymentSchedule::BiWeekly),
            "Accelerated Bi-Weekly" => Ok(PaymentSchedule::AcceleratedBiWeekly),
            other => Err(MortgageError::InvalidPaymentSchedule(other.to_string())),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
