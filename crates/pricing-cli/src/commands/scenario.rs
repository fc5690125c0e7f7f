use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use pricing_core::scenario::{self, ScenarioInput};
use pricing_core::types::ChargeLine;

use super::pct_to_fraction;
use crate::input::{self, catalog::Catalog};

/// Arguments for the original-vs-scenario comparison
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to a JSON or YAML input file (full ScenarioInput)
    #[arg(long)]
    pub input: Option<String>,

    /// Path to the product catalog CSV
    #[arg(long)]
    pub catalog: Option<String>,

    /// Item number whose base figures are pulled from the catalog
    #[arg(long)]
    pub item: Option<String>,

    /// Units ordered in the baseline case
    #[arg(long, default_value = "24")]
    pub base_qty: Decimal,

    /// Merchandise list price per unit
    #[arg(long, default_value = "48.80")]
    pub list_price: Decimal,

    /// Standard unit cost; defaults to the catalog figure when --item is given
    #[arg(long)]
    pub cost: Option<Decimal>,

    /// Merchandise discount percent, clamped to [0, 100]
    #[arg(long, default_value = "20")]
    pub discount: Decimal,

    /// Growth in average order units, percent
    #[arg(long, default_value = "25")]
    pub growth: Decimal,

    /// Setup list price
    #[arg(long, default_value = "105.00")]
    pub setup_list: Decimal,

    /// Setup standard cost
    #[arg(long, default_value = "44.00")]
    pub setup_cost: Decimal,

    /// Setup discount percent
    #[arg(long, default_value = "10")]
    pub setup_discount: Decimal,

    /// Shipping revenue; the catalog figure wins when --item is given
    #[arg(long, default_value = "0")]
    pub shipping_revenue: Decimal,

    /// Shipping cost; the catalog figure wins when --item is given
    #[arg(long, default_value = "0")]
    pub shipping_cost: Decimal,

    /// Shipping discount percent
    #[arg(long, default_value = "10")]
    pub shipping_discount: Decimal,

    /// Handling revenue; the catalog figure wins when --item is given
    #[arg(long, default_value = "0")]
    pub handling_revenue: Decimal,

    /// Handling cost; the catalog figure wins when --item is given
    #[arg(long, default_value = "0")]
    pub handling_cost: Decimal,

    /// Handling discount percent
    #[arg(long, default_value = "0")]
    pub handling_discount: Decimal,
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario_input: ScenarioInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        scenario_from_flags(&args)?
    };
    let result = scenario::project_scenario(&scenario_input)?;
    Ok(serde_json::to_value(result)?)
}

fn scenario_from_flags(args: &ProjectArgs) -> Result<ScenarioInput, Box<dyn std::error::Error>> {
    let (shipping_revenue, shipping_cost, handling_revenue, handling_cost, unit_cost) =
        match (&args.catalog, &args.item) {
            (Some(path), Some(item)) => {
                let catalog = Catalog::load(path)?;
                let record = catalog.get(item)?;
                (
                    record.shipping_revenue,
                    record.shipping_cost,
                    record.handling_revenue,
                    record.handling_cost,
                    args.cost.unwrap_or(record.merchandise_cost),
                )
            }
            (None, None) => (
                args.shipping_revenue,
                args.shipping_cost,
                args.handling_revenue,
                args.handling_cost,
                args.cost.unwrap_or(dec!(24.02)),
            ),
            _ => return Err("--catalog and --item must be given together".into()),
        };

    Ok(ScenarioInput {
        base_quantity: args.base_qty,
        list_price: args.list_price,
        unit_cost,
        discount_fraction: pct_to_fraction(args.discount),
        growth_fraction: pct_to_fraction(args.growth),
        setup: ChargeLine {
            list_price: args.setup_list,
            cost: args.setup_cost,
            discount_fraction: pct_to_fraction(args.setup_discount),
        },
        shipping: ChargeLine {
            list_price: shipping_revenue,
            cost: shipping_cost,
            discount_fraction: pct_to_fraction(args.shipping_discount),
        },
        handling: ChargeLine {
            list_price: handling_revenue,
            cost: handling_cost,
            discount_fraction: pct_to_fraction(args.handling_discount),
        },
    })
}
