use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Fixed payment per period that fully amortizes `principal` over
/// `total_payments` periods at `per_period_rate`.
///
/// Uses the annuity formula M = P * r * (1 + r)^n / ((1 + r)^n - 1).
/// A zero rate degrades to straight-line amortization, principal / n.
pub fn periodic_payment(
    principal: Money,
    total_payments: Decimal,
    per_period_rate: Rate,
) -> MortgageResult<Money> {
    if per_period_rate.is_zero() {
        if total_payments.is_zero() {
            return Err(MortgageError::DivisionByZero {
                context: "straight-line payment with zero total payments".into(),
            });
        }
        return Ok(principal / total_payments);
    }

    let factor = (Decimal::ONE + per_period_rate).powd(total_payments);
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * per_period_rate * factor / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_periodic_payment_reference_case() {
        // 300000 over 360 payments at 0.05/12 per period ~= 1610.4649
        let rate = dec!(0.05) / dec!(12);
        let result = periodic_payment(dec!(300000), dec!(360), rate).unwrap();
        let diff = (result - dec!(1610.4648690364193)).abs();
        assert!(diff < dec!(0.0001), "expected ~1610.4649, got {}", result);
    }

    #[test]
    fn test_periodic_payment_zero_rate_is_straight_line() {
        // 120000 over 120 payments with no interest = exactly 1000 per period
        let result = periodic_payment(dec!(120000), dec!(120), dec!(0)).unwrap();
        assert_eq!(result, dec!(1000));
    }

    #[test]
    fn test_periodic_payment_zero_rate_zero_payments_is_error() {
        assert!(periodic_payment(dec!(100000), dec!(0), dec!(0)).is_err());
    }

    #[test]
    fn test_periodic_payment_single_payment() {
        // One payment repays the principal plus one period of interest
        let result = periodic_payment(dec!(1000), dec!(1), dec!(0.01)).unwrap();
        let diff = (result - dec!(1010)).abs();
        assert!(diff < dec!(0.0001), "expected ~1010, got {}", result);
    }

    #[test]
    fn test_periodic_payment_bi_weekly_reference() {
        // 257000 over 780 payments at 0.05/26 per period
        // factor = (1 + 0.0019231)^780 ~= 4.4755; payment ~= 636.45
        let rate = dec!(0.05) / dec!(26);
        let result = periodic_payment(dec!(257000), dec!(780), rate).unwrap();
        assert!(result > dec!(600) && result < dec!(700), "got {}", result);
    }

    #[test]
    fn test_periodic_payment_covers_interest_accrual() {
        // The payment must always exceed pure per-period interest on the
        // principal, or the loan would never amortize
        let rate = dec!(0.06) / dec!(12);
        let principal = dec!(400000);
        let result = periodic_payment(principal, dec!(300), rate).unwrap();
        assert!(result > principal * rate);
    }
}
