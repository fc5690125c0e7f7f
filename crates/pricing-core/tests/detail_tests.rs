#![cfg(feature = "detail")]

use pricing_core::detail::{build_detail_table, DetailTableInput};
use pricing_core::margin::compute_unit_metrics;
use pricing_core::types::BreakValue;
use pricing_core::PricingError;
use rust_decimal_macros::dec;

// ===========================================================================
// Unit metrics
// ===========================================================================

#[test]
fn test_unit_metrics_reference_case() {
    // 47.80 list, 24.02 cost, 20% discount:
    // price = 47.80 * 0.80 = 38.24
    // margin = 38.24 - 24.02 = 14.22
    // pct = 14.22 / 38.24 ≈ 0.371862
    let m = compute_unit_metrics(dec!(47.80), dec!(24.02), dec!(0.20));
    assert_eq!(m.discounted_price, dec!(38.24));
    assert_eq!(m.gross_margin, dec!(14.22));
    assert!(
        (m.gross_margin_pct - dec!(0.3719)).abs() < dec!(0.0001),
        "expected margin pct ~0.3719, got {}",
        m.gross_margin_pct
    );
}

#[test]
fn test_unit_metrics_zero_discount() {
    let m = compute_unit_metrics(dec!(48.80), dec!(24.02), dec!(0));
    assert_eq!(m.gross_margin, dec!(24.78));
}

#[test]
fn test_unit_metrics_full_discount_zero_guard() {
    let m = compute_unit_metrics(dec!(48.80), dec!(24.02), dec!(1));
    assert_eq!(m.discounted_price, dec!(0));
    assert_eq!(m.gross_margin_pct, dec!(0));
}

// ===========================================================================
// Detail table
// ===========================================================================

fn default_ladder() -> DetailTableInput {
    // The stock five-break ladder with its default price curve
    DetailTableInput {
        quantity_breaks: vec![24, 48, 96, 240, 432],
        list_prices: vec![dec!(48.80), dec!(47.60), dec!(45.20), dec!(38.00), dec!(28.40)],
        unit_cost: BreakValue::Shared(dec!(24.02)),
        discount: BreakValue::Shared(dec!(0.20)),
    }
}

#[test]
fn test_row_order_matches_input_not_value_order() {
    let mut input = default_ladder();
    input.quantity_breaks = vec![240, 24, 432, 96, 48];
    let result = build_detail_table(&input).unwrap();
    let order: Vec<u32> = result.result.rows.iter().map(|r| r.quantity).collect();
    assert_eq!(order, vec![240, 24, 432, 96, 48]);
}

#[test]
fn test_shared_and_constant_per_break_discounts_agree() {
    let shared = build_detail_table(&default_ladder()).unwrap();

    let mut input = default_ladder();
    input.discount = BreakValue::PerBreak(vec![dec!(0.20); 5]);
    let per_break = build_detail_table(&input).unwrap();

    for (a, b) in shared.result.rows.iter().zip(&per_break.result.rows) {
        assert_eq!(a.discounted_price, b.discounted_price);
        assert_eq!(a.gross_margin, b.gross_margin);
    }
}

#[test]
fn test_per_break_cost_mode() {
    let mut input = default_ladder();
    input.unit_cost = BreakValue::PerBreak(vec![
        dec!(24.02),
        dec!(23.50),
        dec!(22.80),
        dec!(21.00),
        dec!(19.40),
    ]);
    let result = build_detail_table(&input).unwrap();
    // qty 432 row: 28.40 * 0.80 - 19.40 = 22.72 - 19.40 = 3.32
    assert_eq!(result.result.rows[4].gross_margin, dec!(3.32));
}

#[test]
fn test_cost_vector_length_mismatch_is_invalid_input() {
    let mut input = default_ladder();
    input.unit_cost = BreakValue::PerBreak(vec![dec!(24.02)]);
    match build_detail_table(&input) {
        Err(PricingError::InvalidInput { field, .. }) => assert_eq!(field, "unit_cost"),
        other => panic!("expected InvalidInput, got {:?}", other.map(|o| o.result.rows.len())),
    }
}

#[test]
fn test_list_price_length_mismatch_is_invalid_input() {
    let mut input = default_ladder();
    input.list_prices.pop();
    assert!(matches!(
        build_detail_table(&input),
        Err(PricingError::InvalidInput { .. })
    ));
}

#[test]
fn test_empty_ladder_is_empty_table() {
    let input = DetailTableInput {
        quantity_breaks: Vec::new(),
        list_prices: Vec::new(),
        unit_cost: BreakValue::Shared(dec!(24.02)),
        discount: BreakValue::Shared(dec!(0.20)),
    };
    let result = build_detail_table(&input).unwrap();
    assert!(result.result.rows.is_empty());
}

#[test]
fn test_duplicate_breaks_are_not_deduplicated() {
    let input = DetailTableInput {
        quantity_breaks: vec![24, 24, 24],
        list_prices: vec![dec!(48.80), dec!(48.80), dec!(48.80)],
        unit_cost: BreakValue::Shared(dec!(24.02)),
        discount: BreakValue::Shared(dec!(0.20)),
    };
    let result = build_detail_table(&input).unwrap();
    assert_eq!(result.result.rows.len(), 3);
}

#[test]
fn test_methodology_string() {
    let result = build_detail_table(&default_ladder()).unwrap();
    assert_eq!(result.methodology, "Quantity-Break Pricing Table");
}
