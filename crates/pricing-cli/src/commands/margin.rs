use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use pricing_core::detail::{self, DetailTableInput};
use pricing_core::margin::compute_unit_metrics;
use pricing_core::types::BreakValue;

use super::{default_list_price, pct_to_fraction};
use crate::input;

/// Arguments for one-shot unit metrics
#[derive(Args)]
pub struct UnitArgs {
    /// List price per unit
    #[arg(long)]
    pub list_price: Decimal,

    /// Standard unit cost
    #[arg(long)]
    pub cost: Decimal,

    /// Discount percent, clamped to [0, 100]
    #[arg(long, default_value = "0")]
    pub discount: Decimal,
}

/// Arguments for the quantity-break pricing table
#[derive(Args)]
pub struct TableArgs {
    /// Path to a JSON or YAML input file (full DetailTableInput)
    #[arg(long)]
    pub input: Option<String>,

    /// Quantity breaks, comma separated
    #[arg(long = "qty", value_delimiter = ',', default_values_t = [24u32, 48, 96, 240, 432])]
    pub quantity_breaks: Vec<u32>,

    /// List price per break, comma separated; defaults to the stock price curve
    #[arg(long = "list-price", value_delimiter = ',')]
    pub list_prices: Vec<Decimal>,

    /// Shared standard unit cost
    #[arg(long, default_value = "24.02")]
    pub cost: Decimal,

    /// Shared discount percent, clamped to [0, 100]
    #[arg(long, default_value = "20")]
    pub discount: Decimal,
}

pub fn run_unit(args: UnitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let metrics = compute_unit_metrics(args.list_price, args.cost, pct_to_fraction(args.discount));
    Ok(serde_json::to_value(metrics)?)
}

pub fn run_table(args: TableArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let table_input: DetailTableInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        table_from_flags(&args)?
    };
    let result = detail::build_detail_table(&table_input)?;
    Ok(serde_json::to_value(result)?)
}

fn table_from_flags(args: &TableArgs) -> Result<DetailTableInput, Box<dyn std::error::Error>> {
    let list_prices = if args.list_prices.is_empty() {
        args.quantity_breaks
            .iter()
            .map(|&q| default_list_price(q))
            .collect()
    } else if args.list_prices.len() == args.quantity_breaks.len() {
        args.list_prices.clone()
    } else {
        return Err(format!(
            "--list-price needs {} values to match --qty, got {}",
            args.quantity_breaks.len(),
            args.list_prices.len()
        )
        .into());
    };

    Ok(DetailTableInput {
        quantity_breaks: args.quantity_breaks.clone(),
        list_prices,
        unit_cost: BreakValue::Shared(args.cost),
        discount: BreakValue::Shared(pct_to_fraction(args.discount)),
    })
}
