use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PricingError;
use crate::margin::safe_pct;
use crate::types::{with_metadata, BreakValue, ComputationOutput, Money, Qty, Rate};
use crate::PricingResult;

// ---------------------------------------------------------------------------
// Types — Average Order Value Projection
// ---------------------------------------------------------------------------

/// Input for the AOV ladder: order value before and after the
/// discount/growth scenario, at every quantity break.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AovInput {
    /// Unit thresholds in display order; never re-sorted
    pub quantity_breaks: Vec<u32>,
    /// List price per unit at each break; parallel to `quantity_breaks`
    pub list_prices: Vec<Money>,
    /// Merchandise discount fraction: shared or per break
    pub discount: BreakValue,
    /// Projected increase in average order units, as a fraction >= 0
    pub growth_fraction: Rate,
}

/// One rung of the AOV ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AovRow {
    pub quantity: u32,
    /// trunc(quantity * (1 + growth_fraction))
    pub scenario_quantity: Qty,
    /// list_price * quantity
    pub original_aov: Money,
    /// discounted price * scenario quantity
    pub scenario_aov: Money,
    pub aov_delta: Money,
    /// Delta over original AOV; 0 when the original is 0
    pub aov_delta_pct: Rate,
}

/// Full AOV-projection output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AovOutput {
    pub rows: Vec<AovRow>,
    pub average_original_aov: Money,
    pub average_scenario_aov: Money,
}

// ---------------------------------------------------------------------------
// Function: project_aov
// ---------------------------------------------------------------------------

/// Project average order value across the quantity-break ladder, applying
/// the same truncation rule to grown quantities as the scenario
/// projection.
pub fn project_aov(input: &AovInput) -> PricingResult<ComputationOutput<AovOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let n = input.quantity_breaks.len();
    if input.list_prices.len() != n {
        return Err(PricingError::InvalidInput {
            field: "list_prices".into(),
            reason: format!(
                "expected {} entries to match quantity_breaks, got {}",
                n,
                input.list_prices.len()
            ),
        });
    }
    let discounts = input.discount.resolve("discount", n)?;

    if input.growth_fraction < Decimal::ZERO {
        warnings.push(format!(
            "growth_fraction {} is negative; scenario orders shrink",
            input.growth_fraction
        ));
    }

    let mut rows = Vec::with_capacity(n);
    for (i, &quantity) in input.quantity_breaks.iter().enumerate() {
        let qty = Decimal::from(quantity);
        let scenario_quantity = (qty * (Decimal::ONE + input.growth_fraction)).trunc();
        let discounted_price = input.list_prices[i] * (Decimal::ONE - discounts[i]);

        let original_aov = input.list_prices[i] * qty;
        let scenario_aov = discounted_price * scenario_quantity;
        let aov_delta = scenario_aov - original_aov;
        rows.push(AovRow {
            quantity,
            scenario_quantity,
            original_aov,
            scenario_aov,
            aov_delta,
            aov_delta_pct: safe_pct(aov_delta, original_aov),
        });
    }

    let count = Decimal::from(rows.len() as u64);
    let original_total: Decimal = rows.iter().map(|r| r.original_aov).sum();
    let scenario_total: Decimal = rows.iter().map(|r| r.scenario_aov).sum();

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Average Order Value Projection",
        input,
        warnings,
        elapsed,
        AovOutput {
            rows,
            average_original_aov: safe_pct(original_total, count),
            average_scenario_aov: safe_pct(scenario_total, count),
        },
    ))
}
