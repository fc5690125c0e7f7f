use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use pricing_core::aov::{self, AovInput};
use pricing_core::types::BreakValue;

use super::{default_list_price, pct_to_fraction};
use crate::input;

/// Arguments for the average-order-value projection
#[derive(Args)]
pub struct AovArgs {
    /// Path to a JSON or YAML input file (full AovInput)
    #[arg(long)]
    pub input: Option<String>,

    /// Quantity breaks, comma separated
    #[arg(long = "qty", value_delimiter = ',', default_values_t = [24u32, 48, 96, 240, 432])]
    pub quantity_breaks: Vec<u32>,

    /// List price per break, comma separated; defaults to the stock price curve
    #[arg(long = "list-price", value_delimiter = ',')]
    pub list_prices: Vec<Decimal>,

    /// Shared discount percent, clamped to [0, 100]
    #[arg(long, default_value = "20")]
    pub discount: Decimal,

    /// Growth in average order units, percent
    #[arg(long, default_value = "25")]
    pub growth: Decimal,
}

pub fn run_aov(args: AovArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let aov_input: AovInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        aov_from_flags(&args)?
    };
    let result = aov::project_aov(&aov_input)?;
    Ok(serde_json::to_value(result)?)
}

fn aov_from_flags(args: &AovArgs) -> Result<AovInput, Box<dyn std::error::Error>> {
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

    Ok(AovInput {
        quantity_breaks: args.quantity_breaks.clone(),
        list_prices,
        discount: BreakValue::Shared(pct_to_fraction(args.discount)),
        growth_fraction: pct_to_fraction(args.growth),
    })
}
