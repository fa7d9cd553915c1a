//! Rate and period conversions shared by the quote pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Rate, Years};
use crate::MortgageResult;

const PERCENT_SCALE: Decimal = dec!(100);

/// Convert a percentage quote to a decimal rate (5 becomes 0.05).
/// No bounds checking: negative or >100 values pass through unchanged.
pub fn percent_to_decimal(percentage: Rate) -> Rate {
    percentage / PERCENT_SCALE
}

/// Interest rate per payment period from the annual decimal rate.
/// A 5% annual rate paid monthly is 0.05 / 12 = 0.004167 per period.
///
/// Zero periods per year is unreachable once a schedule has been parsed,
/// but Decimal division panics on zero so the guard stays structured.
pub fn per_period_rate(annual_rate: Rate, periods_per_year: u32) -> MortgageResult<Rate> {
    if periods_per_year == 0 {
        return Err(MortgageError::DivisionByZero {
            context: "per-period rate with zero periods per year".into(),
        });
    }
    Ok(annual_rate / Decimal::from(periods_per_year))
}

/// Total number of payments over the amortization period.
/// 30 years of monthly payments is 30 * 12 = 360 payments; zero years
/// yields zero payments.
pub fn total_payments(periods_per_year: u32, amortization_years: Years) -> Decimal {
    Decimal::from(periods_per_year) * amortization_years
}

/// Down payment as a percentage of the property price.
pub fn down_payment_percentage(
    property_price: Money,
    down_payment: Money,
) -> MortgageResult<Decimal> {
    if property_price.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "down payment percentage with zero property price".into(),
        });
    }
    Ok(down_payment / property_price * PERCENT_SCALE)
}
