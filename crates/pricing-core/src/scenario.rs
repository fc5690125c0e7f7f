use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::margin::{compute_unit_metrics, safe_pct};
use crate::types::{with_metadata, ChargeLine, ComputationOutput, Money, Qty, Rate};
use crate::PricingResult;

// ---------------------------------------------------------------------------
// Types — Scenario Projection
// ---------------------------------------------------------------------------

/// Input for the original-vs-scenario margin comparison.
///
/// The "original" case sells `base_quantity` units at the undiscounted
/// list price; the "scenario" case sells the growth-projected quantity at
/// the discounted price. Setup, shipping and handling apply identically to
/// both cases: their revenues are discounted, their costs are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Units ordered in the baseline case (the anchor quantity break)
    pub base_quantity: Qty,
    /// Merchandise list price per unit at that break
    pub list_price: Money,
    /// Standard merchandise unit cost; held constant across the projection
    pub unit_cost: Money,
    /// Merchandise discount fraction
    pub discount_fraction: Rate,
    /// Projected increase in average order units, as a fraction >= 0
    pub growth_fraction: Rate,
    pub setup: ChargeLine,
    pub shipping: ChargeLine,
    pub handling: ChargeLine,
}

/// Sales, cost and margin totals for one side of the comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub sales: Money,
    pub cogs: Money,
    pub gross_margin: Money,
    /// Gross margin over sales; 0 when sales are 0
    pub gross_margin_pct: Rate,
}

/// Full scenario-projection output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutput {
    /// Merchandise price per unit after discount
    pub discounted_price: Money,
    pub base_quantity: Qty,
    /// trunc(base_quantity * (1 + growth_fraction)), toward zero, never rounded
    pub scenario_quantity: Qty,
    pub original: AggregateTotals,
    pub scenario: AggregateTotals,
    /// scenario gross margin minus original gross margin
    pub gross_margin_delta: Money,
    /// Percentage-point change in gross margin percent
    pub gross_margin_pct_delta: Rate,
    pub quantity_delta: Qty,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Merchandise totals plus the shared per-order charges.
fn totalize(
    merch_sales: Money,
    merch_cogs: Money,
    charge_revenue: Money,
    charge_cost: Money,
) -> AggregateTotals {
    let sales = merch_sales + charge_revenue;
    let cogs = merch_cogs + charge_cost;
    let gross_margin = sales - cogs;
    AggregateTotals {
        sales,
        cogs,
        gross_margin,
        gross_margin_pct: safe_pct(gross_margin, sales),
    }
}

// ---------------------------------------------------------------------------
// Function: project_scenario
// ---------------------------------------------------------------------------

/// Project the discount/growth scenario against the undiscounted baseline
/// and report both aggregates plus the deltas between them.
pub fn project_scenario(input: &ScenarioInput) -> PricingResult<ComputationOutput<ScenarioOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let discount_checks = [
        ("discount_fraction", input.discount_fraction),
        ("setup.discount_fraction", input.setup.discount_fraction),
        ("shipping.discount_fraction", input.shipping.discount_fraction),
        ("handling.discount_fraction", input.handling.discount_fraction),
    ];
    for (field, fraction) in discount_checks {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            warnings.push(format!("{} {} is outside [0, 1]", field, fraction));
        }
    }
    if input.growth_fraction < Decimal::ZERO {
        warnings.push(format!(
            "growth_fraction {} is negative; the scenario order shrinks",
            input.growth_fraction
        ));
    }

    let unit = compute_unit_metrics(input.list_price, input.unit_cost, input.discount_fraction);
    let scenario_quantity =
        (input.base_quantity * (Decimal::ONE + input.growth_fraction)).trunc();

    // Charges are identical on both sides of the comparison
    let charge_revenue =
        input.setup.net_revenue() + input.shipping.net_revenue() + input.handling.net_revenue();
    let charge_cost = input.setup.cost + input.shipping.cost + input.handling.cost;

    let original = totalize(
        input.list_price * input.base_quantity,
        input.unit_cost * input.base_quantity,
        charge_revenue,
        charge_cost,
    );
    let scenario = totalize(
        unit.discounted_price * scenario_quantity,
        input.unit_cost * scenario_quantity,
        charge_revenue,
        charge_cost,
    );

    let output = ScenarioOutput {
        discounted_price: unit.discounted_price,
        base_quantity: input.base_quantity,
        scenario_quantity,
        gross_margin_delta: scenario.gross_margin - original.gross_margin,
        gross_margin_pct_delta: scenario.gross_margin_pct - original.gross_margin_pct,
        quantity_delta: scenario_quantity - input.base_quantity,
        original,
        scenario,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discount / Growth Scenario Projection",
        input,
        warnings,
        elapsed,
        output,
    ))
}
