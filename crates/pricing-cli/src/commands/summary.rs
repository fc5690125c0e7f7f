use clap::Args;
use serde_json::Value;

use pricing_core::summary::{self, CategorySummaryInput};

use crate::input;

/// Arguments for the category gross-margin roll-up
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to a JSON or YAML input file (CategorySummaryInput)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let summary_input: CategorySummaryInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for the category summary".into());
    };
    let result = summary::summarize_categories(&summary_input)?;
    Ok(serde_json::to_value(result)?)
}
