//! CMHC default-insurance policy: whether mandatory insurance applies, the
//! premium rate tier for a given down payment, and how the premium is folded
//! into the financed amount. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Equity share at or above which default insurance is not required.
const UNINSURED_EQUITY_SHARE: Decimal = dec!(0.20);

/// Tier boundaries, as down-payment percentages of the property price.
const TIER_UNDER_10: Decimal = dec!(10);
const TIER_UNDER_15: Decimal = dec!(15);
const TIER_UNDER_20: Decimal = dec!(20);

/// Default insurance is mandatory when the down payment is strictly below
/// 20% of the property price. Exactly 20% needs no insurance.
pub fn is_insurance_required(property_price: Money, down_payment: Money) -> bool {
    down_payment < UNINSURED_EQUITY_SHARE * property_price
}

/// Premium rate tier for a given down-payment percentage.
///
/// Below 10% equity prices at 4.50%, 10-15% at 3.10%, 15-20% at 2.80%.
/// At 20% or more the rate is zero; insurance is never required there, but
/// the tier remains answerable for any percentage.
pub fn premium_rate(down_payment_percentage: Decimal) -> Rate {
    if down_payment_percentage < TIER_UNDER_10 {
        dec!(0.045)
    } else if down_payment_percentage < TIER_UNDER_15 {
        dec!(0.031)
    } else if down_payment_percentage < TIER_UNDER_20 {
        dec!(0.028)
    } else {
        Decimal::ZERO
    }
}

/// Premium owed: the tier rate applied to the principal before insurance
/// (property price minus down payment).
pub fn insurance_premium(rate: Rate, principal_before_insurance: Money) -> Money {
    rate * principal_before_insurance
}

/// Fold the premium into the amount actually financed.
pub fn apply_premium(current_principal: Money, premium: Money) -> Money {
    current_principal + premium
}
