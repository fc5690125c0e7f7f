use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PricingError;
use crate::margin::compute_unit_metrics;
use crate::types::{with_metadata, BreakValue, ComputationOutput, Money, Rate};
use crate::PricingResult;

// ---------------------------------------------------------------------------
// Types — Quantity-Break Pricing Table
// ---------------------------------------------------------------------------

/// Input for the per-quantity-break pricing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailTableInput {
    /// Unit thresholds in display order. Ascending by convention, but the
    /// table keeps whatever order is given and never re-sorts.
    pub quantity_breaks: Vec<u32>,
    /// List price per unit at each break; parallel to `quantity_breaks`
    pub list_prices: Vec<Money>,
    /// Standard unit cost: one shared figure or one per break
    pub unit_cost: BreakValue,
    /// Merchandise discount fraction: shared or per break
    pub discount: BreakValue,
}

/// One row of the pricing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRow {
    pub quantity: u32,
    pub list_price: Money,
    pub unit_cost: Money,
    pub discount_fraction: Rate,
    pub discounted_price: Money,
    pub gross_margin: Money,
    pub gross_margin_pct: Rate,
}

/// Full pricing-table output: one row per quantity break, input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailTableOutput {
    pub rows: Vec<DetailRow>,
}

// ---------------------------------------------------------------------------
// Function: build_detail_table
// ---------------------------------------------------------------------------

/// Build the pricing table: discounted price, gross margin dollars and
/// gross margin percent for every quantity break.
///
/// Out-of-range discount fractions are computed as given and reported as
/// warnings; clamping belongs to the presentation boundary.
pub fn build_detail_table(
    input: &DetailTableInput,
) -> PricingResult<ComputationOutput<DetailTableOutput>> {
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

    let unit_costs = input.unit_cost.resolve("unit_cost", n)?;
    let discounts = input.discount.resolve("discount", n)?;

    if !input.quantity_breaks.windows(2).all(|w| w[0] <= w[1]) {
        warnings.push(
            "Quantity breaks are not in ascending order; rows keep the given order".to_string(),
        );
    }

    let mut rows = Vec::with_capacity(n);
    for (i, &quantity) in input.quantity_breaks.iter().enumerate() {
        let discount_fraction = discounts[i];
        if discount_fraction < Decimal::ZERO || discount_fraction > Decimal::ONE {
            warnings.push(format!(
                "Discount fraction {} at quantity break {} is outside [0, 1]",
                discount_fraction, quantity
            ));
        }

        let metrics = compute_unit_metrics(input.list_prices[i], unit_costs[i], discount_fraction);
        rows.push(DetailRow {
            quantity,
            list_price: input.list_prices[i],
            unit_cost: unit_costs[i],
            discount_fraction,
            discounted_price: metrics.discounted_price,
            gross_margin: metrics.gross_margin,
            gross_margin_pct: metrics.gross_margin_pct,
        });
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Quantity-Break Pricing Table",
        input,
        warnings,
        elapsed,
        DetailTableOutput { rows },
    ))
}
