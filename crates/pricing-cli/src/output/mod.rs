pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Field names that hold dollar amounts in engine output.
pub(crate) fn is_money_key(key: &str) -> bool {
    const MONEY_KEYS: [&str; 17] = [
        "list_price",
        "unit_cost",
        "discounted_price",
        "gross_margin",
        "gross_margin_delta",
        "sales",
        "cogs",
        "original_aov",
        "scenario_aov",
        "aov_delta",
        "average_original_aov",
        "average_scenario_aov",
        "shipping_revenue",
        "shipping_cost",
        "handling_revenue",
        "handling_cost",
        "merchandise_cost",
    ];
    MONEY_KEYS.contains(&key)
}

/// Field names that hold fractions rendered as percentages.
pub(crate) fn is_percent_key(key: &str) -> bool {
    key.contains("pct") || key.ends_with("fraction")
}
