//! Per-field validation of raw client input.
//!
//! Every field arrives as optional text and is parsed explicitly before any
//! comparison; an absent or unparsable value is a parse failure, never a NaN
//! stand-in. Field checks accumulate independently in a fixed order, except
//! the three deposit gates which short-circuit each other.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Minimum statutory down payment as a percentage of the property price.
const MIN_DOWN_PAYMENT_PCT: Decimal = dec!(5);

const MSG_PROPERTY_PRICE: &str = "You must submit a valid property price.";
const MSG_INTEREST_RATE: &str = "You must submit a valid interest rate.";
const MSG_AMORTIZATION: &str = "You must select an amortization period.";
const MSG_SCHEDULE: &str = "You must select a payment schedule.";
const MSG_DEPOSIT_INVALID: &str = "You must submit a valid deposit.";
const MSG_DEPOSIT_EXCEEDS_PRICE: &str = "A deposit cannot exceed the property's total price!";
const MSG_DEPOSIT_BELOW_MINIMUM: &str = "A deposit for a mortgage cannot be less than 5%!";

/// A loan request exactly as it arrives from a client form or HTTP body:
/// five fields, each possibly absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMortgageRequest {
    #[serde(default)]
    pub property_price: Option<String>,
    #[serde(default)]
    pub down_payment: Option<String>,
    /// Annual interest rate as a percentage (5 = 5%).
    #[serde(default)]
    pub interest_rate: Option<String>,
    /// Amortization period in years.
    #[serde(default)]
    pub amortization_period: Option<String>,
    #[serde(default)]
    pub payment_schedule: Option<String>,
}

/// At most one human-readable message per field. An all-`None` record means
/// the request is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_price_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amortization_period_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_schedule_error: Option<String>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.property_price_error.is_none()
            && self.down_payment_error.is_none()
            && self.interest_rate_error.is_none()
            && self.amortization_period_error.is_none()
            && self.payment_schedule_error.is_none()
    }

    /// Messages in field-check order, for callers that render a flat list.
    pub fn messages(&self) -> Vec<&str> {
        [
            &self.property_price_error,
            &self.interest_rate_error,
            &self.amortization_period_error,
            &self.payment_schedule_error,
            &self.down_payment_error,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect()
    }
}

/// Parse an optional client-supplied field into a Decimal.
/// Returns `None` for absent or unparsable text.
pub fn parse_decimal(raw: Option<&String>) -> Option<Decimal> {
    raw.and_then(|s| Decimal::from_str(s.trim()).ok())
}

/// Validate a raw request against the domain rules.
///
/// Checks run in a fixed order and accumulate without short-circuiting the
/// whole function; only the deposit gates short-circuit each other.
pub fn validate_request(request: &RawMortgageRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let property_price = parse_decimal(request.property_price.as_ref());
    let down_payment = parse_decimal(request.down_payment.as_ref());
    let interest_rate = parse_decimal(request.interest_rate.as_ref());

    match property_price {
        Some(price) if price > Decimal::ZERO => {}
        _ => errors.property_price_error = Some(MSG_PROPERTY_PRICE.to_string()),
    }

    match interest_rate {
        Some(rate) if rate > Decimal::ZERO => {}
        _ => errors.interest_rate_error = Some(MSG_INTEREST_RATE.to_string()),
    }

    // Presence only; the numeric value is the orchestrator's concern
    if request.amortization_period.is_none() {
        errors.amortization_period_error = Some(MSG_AMORTIZATION.to_string());
    }

    if request.payment_schedule.is_none() {
        errors.payment_schedule_error = Some(MSG_SCHEDULE.to_string());
    }

    errors.down_payment_error = deposit_error(property_price, down_payment);

    errors
}

/// The three deposit gates, in order: invalid, exceeds price, below the 5%
/// minimum. The first gate that fails wins and the rest are skipped.
fn deposit_error(
    property_price: Option<Decimal>,
    down_payment: Option<Decimal>,
) -> Option<String> {
    let down = match down_payment {
        Some(d) if d > Decimal::ZERO => d,
        _ => return Some(MSG_DEPOSIT_INVALID.to_string()),
    };

    // Without a parsed price the two price comparisons are vacuously false;
    // the price field already carries its own error.
    let price = property_price?;

    if down > price {
        return Some(MSG_DEPOSIT_EXCEEDS_PRICE.to_string());
    }

    // Reached only when 0 < down <= price, so price is positive here
    if down / price * dec!(100) < MIN_DOWN_PAYMENT_PCT {
        return Some(MSG_DEPOSIT_BELOW_MINIMUM.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_request() -> RawMortgageRequest {
        RawMortgageRequest {
            property_price: Some("100000".to_string()),
            down_payment: Some("5000".to_string()),
            interest_rate: Some("5".to_string()),
            amortization_period: Some("20".to_string()),
            payment_schedule: Some("Monthly".to_string()),
        }
    }

    #[test]
    fn test_valid_request_produces_no_errors() {
        let errors = validate_request(&valid_request());
        assert!(errors.is_valid());
        assert_eq!(errors, ValidationErrors::default());
    }

    #[test]
    fn test_missing_property_price() {
        let mut request = valid_request();
        request.property_price = None;
        let errors = validate_request(&request);
        assert_eq!(
            errors.property_price_error.as_deref(),
            Some("You must submit a valid property price.")
        );
    }

    #[test]
    fn test_non_numeric_property_price() {
        let mut request = valid_request();
        request.property_price = Some("a lot".to_string());
        let errors = validate_request(&request);
        assert!(errors.property_price_error.is_some());
    }

    #[test]
    fn test_zero_property_price() {
        let mut request = valid_request();
        request.property_price = Some("0".to_string());
        let errors = validate_request(&request);
        assert!(errors.property_price_error.is_some());
    }

    #[test]
    fn test_missing_interest_rate() {
        let mut request = valid_request();
        request.interest_rate = None;
        let errors = validate_request(&request);
        assert_eq!(
            errors.interest_rate_error.as_deref(),
            Some("You must submit a valid interest rate.")
        );
    }

    #[test]
    fn test_negative_interest_rate() {
        let mut request = valid_request();
        request.interest_rate = Some("-1".to_string());
        let errors = validate_request(&request);
        assert!(errors.interest_rate_error.is_some());
    }

    #[test]
    fn test_missing_amortization_period() {
        let mut request = valid_request();
        request.amortization_period = None;
        let errors = validate_request(&request);
        assert_eq!(
            errors.amortization_period_error.as_deref(),
            Some("You must select an amortization period.")
        );
    }

    #[test]
    fn test_amortization_period_is_presence_only() {
        // A present but non-numeric amortization passes this layer
        let mut request = valid_request();
        request.amortization_period = Some("soon".to_string());
        let errors = validate_request(&request);
        assert!(errors.amortization_period_error.is_none());
    }

    #[test]
    fn test_missing_payment_schedule() {
        let mut request = valid_request();
        request.payment_schedule = None;
        let errors = validate_request(&request);
        assert_eq!(
            errors.payment_schedule_error.as_deref(),
            Some("You must select a payment schedule.")
        );
    }

    #[test]
    fn test_unknown_payment_schedule_passes_presence_check() {
        // The closed-enum check happens in the orchestrator, not here
        let mut request = valid_request();
        request.payment_schedule = Some("Weekly".to_string());
        let errors = validate_request(&request);
        assert!(errors.payment_schedule_error.is_none());
    }

    #[test]
    fn test_zero_down_payment() {
        let mut request = valid_request();
        request.down_payment = Some("0".to_string());
        let errors = validate_request(&request);
        assert_eq!(
            errors.down_payment_error.as_deref(),
            Some("You must submit a valid deposit.")
        );
    }

    #[test]
    fn test_missing_down_payment() {
        let mut request = valid_request();
        request.down_payment = None;
        let errors = validate_request(&request);
        assert_eq!(
            errors.down_payment_error.as_deref(),
            Some("You must submit a valid deposit.")
        );
    }

    #[test]
    fn test_down_payment_exceeds_property_price() {
        let mut request = valid_request();
        request.down_payment = Some("150000".to_string());
        let errors = validate_request(&request);
        assert_eq!(
            errors.down_payment_error.as_deref(),
            Some("A deposit cannot exceed the property's total price!")
        );
    }

    #[test]
    fn test_down_payment_below_5_pct() {
        // 4000 / 100000 = 4%
        let mut request = valid_request();
        request.down_payment = Some("4000".to_string());
        let errors = validate_request(&request);
        assert_eq!(
            errors.down_payment_error.as_deref(),
            Some("A deposit for a mortgage cannot be less than 5%!")
        );
    }

    #[test]
    fn test_down_payment_exactly_5_pct_is_valid() {
        let mut request = valid_request();
        request.down_payment = Some("5000".to_string());
        let errors = validate_request(&request);
        assert!(errors.down_payment_error.is_none());
    }

    #[test]
    fn test_deposit_gates_short_circuit() {
        // A deposit that both exceeds the price and is "invalid-looking"
        // reports the first failing gate only: here exceeds-price wins over
        // the 5% check, and a missing deposit wins over everything
        let mut request = valid_request();
        request.down_payment = Some("150000".to_string());
        let errors = validate_request(&request);
        assert_eq!(
            errors.down_payment_error.as_deref(),
            Some("A deposit cannot exceed the property's total price!")
        );

        request.down_payment = None;
        let errors = validate_request(&request);
        assert_eq!(
            errors.down_payment_error.as_deref(),
            Some("You must submit a valid deposit.")
        );
    }

    #[test]
    fn test_unparsable_price_skips_deposit_comparisons() {
        // With no parsed price the exceeds/minimum comparisons are vacuous;
        // only the price field is flagged
        let mut request = valid_request();
        request.property_price = Some("expensive".to_string());
        let errors = validate_request(&request);
        assert!(errors.property_price_error.is_some());
        assert!(errors.down_payment_error.is_none());
    }

    #[test]
    fn test_multiple_fields_accumulate() {
        let request = RawMortgageRequest::default();
        let errors = validate_request(&request);
        assert!(errors.property_price_error.is_some());
        assert!(errors.down_payment_error.is_some());
        assert!(errors.interest_rate_error.is_some());
        assert!(errors.amortization_period_error.is_some());
        assert!(errors.payment_schedule_error.is_some());
        assert_eq!(errors.messages().len(), 5);
    }

    #[test]
    fn test_parse_decimal_trims_whitespace() {
        let raw = Some(" 300000 ".to_string());
        assert_eq!(parse_decimal(raw.as_ref()), Some(dec!(300000)));
    }

    #[test]
    fn test_parse_decimal_rejects_trailing_garbage() {
        let raw = Some("300000 dollars".to_string());
        assert_eq!(parse_decimal(raw.as_ref()), None);
    }

    #[test]
    fn test_serde_camel_case_wire_names() {
        let json = r#"{
            "propertyPrice": "300000",
            "downPayment": "50000",
            "interestRate": "5",
            "amortizationPeriod": "30",
            "paymentSchedule": "Monthly"
        }"#;
        let request: RawMortgageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.property_price.as_deref(), Some("300000"));
        assert!(validate_request(&request).is_valid());
    }

    #[test]
    fn test_validation_errors_serialize_skips_clean_fields() {
        let mut request = valid_request();
        request.interest_rate = None;
        let errors = validate_request(&request);
        let json = serde_json::to_value(&errors).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("interestRateError"));
    }
}
