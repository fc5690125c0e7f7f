use clap::Args;
use serde_json::Value;

use crate::input::catalog::Catalog;

/// Arguments for a catalog item lookup
#[derive(Args)]
pub struct LookupArgs {
    /// Path to the product catalog CSV
    #[arg(long)]
    pub catalog: String,

    /// Item number
    #[arg(long)]
    pub item: String,
}

pub fn run_lookup(args: LookupArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&args.catalog)?;
    let record = catalog.get(&args.item)?;
    Ok(serde_json::to_value(record)?)
}
