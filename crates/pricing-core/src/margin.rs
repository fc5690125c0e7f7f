use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// Derived unit economics for one (list price, cost, discount) combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitMetrics {
    /// List price after discount
    pub discounted_price: Money,
    /// Discounted price minus unit cost
    pub gross_margin: Money,
    /// Gross margin over discounted price; 0 when the discounted price is 0
    pub gross_margin_pct: Rate,
}

/// Gross-margin arithmetic for a single unit.
///
/// Trusts its inputs: range enforcement (discount within [0,1],
/// non-negative prices) happens once at the presentation boundary, not
/// here. A zero discounted price yields a zero margin percent rather than
/// a division error.
pub fn compute_unit_metrics(
    list_price: Money,
    unit_cost: Money,
    discount_fraction: Rate,
) -> UnitMetrics {
    let discounted_price = list_price * (Decimal::ONE - discount_fraction);
    let gross_margin = discounted_price - unit_cost;
    UnitMetrics {
        discounted_price,
        gross_margin,
        gross_margin_pct: safe_pct(gross_margin, discounted_price),
    }
}

/// Safe percentage: returns Decimal::ZERO when the denominator is zero.
pub(crate) fn safe_pct(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_discount_margin_is_list_minus_cost() {
        let m = compute_unit_metrics(dec!(50), dec!(30), dec!(0));
        assert_eq!(m.discounted_price, dec!(50));
        assert_eq!(m.gross_margin, dec!(20));
        // 20 / 50 = 0.40
        assert_eq!(m.gross_margin_pct, dec!(0.40));
    }

    #[test]
    fn test_full_discount_triggers_zero_guard() {
        let m = compute_unit_metrics(dec!(50), dec!(30), dec!(1));
        assert_eq!(m.discounted_price, dec!(0));
        assert_eq!(m.gross_margin, dec!(-30));
        assert_eq!(m.gross_margin_pct, dec!(0), "zero price must not divide");
    }

    #[test]
    fn test_reference_case() {
        // 47.80 * 0.80 = 38.24; 38.24 - 24.02 = 14.22; 14.22 / 38.24 ≈ 0.3719
        let m = compute_unit_metrics(dec!(47.80), dec!(24.02), dec!(0.20));
        assert_eq!(m.discounted_price, dec!(38.24));
        assert_eq!(m.gross_margin, dec!(14.22));
        assert!((m.gross_margin_pct - dec!(0.3719)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_discounted_price_non_increasing_in_discount() {
        let fractions = [dec!(0), dec!(0.1), dec!(0.25), dec!(0.5), dec!(0.75), dec!(1)];
        let mut last = compute_unit_metrics(dec!(47.80), dec!(24.02), fractions[0]).discounted_price;
        for f in &fractions[1..] {
            let price = compute_unit_metrics(dec!(47.80), dec!(24.02), *f).discounted_price;
            assert!(price <= last, "price rose as the discount deepened");
            last = price;
        }
    }

    #[test]
    fn test_safe_pct_zero_denominator() {
        assert_eq!(safe_pct(dec!(5), dec!(0)), dec!(0));
        assert_eq!(safe_pct(dec!(5), dec!(2)), dec!(2.5));
    }
}
