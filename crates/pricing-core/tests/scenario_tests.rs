#![cfg(feature = "scenario")]

use pretty_assertions::assert_eq;
use pricing_core::scenario::{project_scenario, ScenarioInput};
use pricing_core::types::ChargeLine;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn charge(list_price: Decimal, cost: Decimal, discount: Decimal) -> ChargeLine {
    ChargeLine {
        list_price,
        cost,
        discount_fraction: discount,
    }
}

fn stock_scenario() -> ScenarioInput {
    // The stock interactive defaults: 24 units, 20% merchandise discount,
    // 25% order growth, $105/$44 setup at 10% off, shipping at 10% off,
    // handling undiscounted.
    ScenarioInput {
        base_quantity: dec!(24),
        list_price: dec!(48.80),
        unit_cost: dec!(24.02),
        discount_fraction: dec!(0.20),
        growth_fraction: dec!(0.25),
        setup: charge(dec!(105.00), dec!(44.00), dec!(0.10)),
        shipping: charge(dec!(18.50), dec!(12.75), dec!(0.10)),
        handling: charge(dec!(6.00), dec!(2.10), dec!(0)),
    }
}

// ===========================================================================
// Growth projection
// ===========================================================================

#[test]
fn test_growth_24_at_25_pct_is_30() {
    // 24 * 1.25 = 30 exactly
    let result = project_scenario(&stock_scenario()).unwrap();
    assert_eq!(result.result.scenario_quantity, dec!(30));
}

#[test]
fn test_growth_48_at_33_pct_truncates_to_63() {
    // 48 * 1.33 = 63.84, truncated toward zero rather than rounded
    let mut input = stock_scenario();
    input.base_quantity = dec!(48);
    input.growth_fraction = dec!(0.33);
    let result = project_scenario(&input).unwrap();
    assert_eq!(result.result.scenario_quantity, dec!(63));
}

#[test]
fn test_zero_growth_keeps_base_quantity() {
    let mut input = stock_scenario();
    input.growth_fraction = dec!(0);
    let result = project_scenario(&input).unwrap();
    assert_eq!(result.result.scenario_quantity, dec!(24));
    assert_eq!(result.result.quantity_delta, dec!(0));
}

// ===========================================================================
// Aggregates
// ===========================================================================

#[test]
fn test_aggregate_revenue_discounts_revenues_only() {
    // original sales = 48.80*24 + 105*0.9 + 18.50*0.9 + 6.00 = 1288.35
    // original cogs  = 24.02*24 + 44 + 12.75 + 2.10 = 635.33
    let result = project_scenario(&stock_scenario()).unwrap();
    assert_eq!(result.result.original.sales, dec!(1288.35));
    assert_eq!(result.result.original.cogs, dec!(635.33));
    assert_eq!(result.result.original.gross_margin, dec!(653.02));
}

#[test]
fn test_unit_cost_not_scaled_by_discount_in_scenario() {
    // scenario cogs = 24.02 * 30 + 58.85 = 779.45; the 20% merchandise
    // discount touches sales only
    let result = project_scenario(&stock_scenario()).unwrap();
    assert_eq!(result.result.scenario.cogs, dec!(779.45));
}

#[test]
fn test_deltas_are_scenario_minus_original() {
    let result = project_scenario(&stock_scenario()).unwrap();
    let out = &result.result;
    assert_eq!(
        out.gross_margin_delta,
        out.scenario.gross_margin - out.original.gross_margin
    );
    assert_eq!(
        out.gross_margin_pct_delta,
        out.scenario.gross_margin_pct - out.original.gross_margin_pct
    );
    assert_eq!(out.quantity_delta, dec!(6));
}

#[test]
fn test_zero_everything_defines_pct_zero() {
    let input = ScenarioInput {
        base_quantity: dec!(0),
        list_price: dec!(0),
        unit_cost: dec!(0),
        discount_fraction: dec!(0),
        growth_fraction: dec!(0),
        setup: charge(dec!(0), dec!(0), dec!(0)),
        shipping: charge(dec!(0), dec!(0), dec!(0)),
        handling: charge(dec!(0), dec!(0), dec!(0)),
    };
    let result = project_scenario(&input).unwrap();
    assert_eq!(result.result.original.gross_margin_pct, dec!(0));
    assert_eq!(result.result.scenario.gross_margin_pct, dec!(0));
    assert_eq!(result.result.gross_margin_pct_delta, dec!(0));
}

// ===========================================================================
// Purity
// ===========================================================================

#[test]
fn test_identical_inputs_yield_identical_results() {
    let input = stock_scenario();
    let first = project_scenario(&input).unwrap();
    let second = project_scenario(&input).unwrap();
    assert_eq!(
        serde_json::to_value(&first.result).unwrap(),
        serde_json::to_value(&second.result).unwrap()
    );
}

#[test]
fn test_out_of_range_discount_warns_but_computes() {
    let mut input = stock_scenario();
    input.discount_fraction = dec!(1.25);
    let result = project_scenario(&input).unwrap();
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("discount_fraction")));
    // computed as given: 48.80 * (1 - 1.25) = -12.20
    assert_eq!(result.result.discounted_price, dec!(-12.20));
}
