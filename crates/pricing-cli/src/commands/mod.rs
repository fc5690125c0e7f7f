pub mod aov;
pub mod catalog;
pub mod margin;
pub mod scenario;
pub mod summary;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Convert a user-facing percentage to the engine's fraction form,
/// clamping to [0, 100] first. Range enforcement lives here, once, at the
/// presentation boundary; the engine trusts what it receives.
pub fn pct_to_fraction(pct: Decimal) -> Decimal {
    pct.clamp(Decimal::ZERO, dec!(100)) / dec!(100)
}

/// Stock list-price curve for the default quantity ladder: $50 less $1
/// per 20 units, floored at zero.
pub fn default_list_price(quantity: u32) -> Decimal {
    (dec!(50) - Decimal::from(quantity) / dec!(20))
        .max(Decimal::ZERO)
        .round_dp(2)
}
