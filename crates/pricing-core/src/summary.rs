use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PricingError;
use crate::margin::safe_pct;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::PricingResult;

// ---------------------------------------------------------------------------
// Types — Category Roll-up
// ---------------------------------------------------------------------------

/// Realized sales and cost for one item, as produced by a detail or
/// scenario computation upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginLine {
    pub item: String,
    /// Catalog category; uncategorized items roll up together
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub sales: Money,
    pub cogs: Money,
}

/// Input for the category summary report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummaryInput {
    pub lines: Vec<MarginLine>,
}

/// Aggregated figures for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub category: String,
    pub items: usize,
    pub sales: Money,
    pub cogs: Money,
    pub gross_margin: Money,
    /// Gross margin over sales; 0 when sales are 0
    pub gross_margin_pct: Rate,
}

/// Full category-summary output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummaryOutput {
    /// One entry per category, in first-appearance order
    pub categories: Vec<CategoryTotals>,
    pub overall: CategoryTotals,
}

const UNCATEGORIZED: &str = "Uncategorized";

// ---------------------------------------------------------------------------
// Function: summarize_categories
// ---------------------------------------------------------------------------

/// Roll margin lines up by catalog category. Categories appear in the
/// order their first item appears; lines are never re-sorted.
pub fn summarize_categories(
    input: &CategorySummaryInput,
) -> PricingResult<ComputationOutput<CategorySummaryOutput>> {
    let start = Instant::now();

    if input.lines.is_empty() {
        return Err(PricingError::InsufficientData(
            "category summary requires at least one margin line".into(),
        ));
    }

    let mut categories: Vec<CategoryTotals> = Vec::new();
    for line in &input.lines {
        let name = line.category.as_deref().unwrap_or(UNCATEGORIZED);
        let idx = match categories.iter().position(|c| c.category == name) {
            Some(i) => i,
            None => {
                categories.push(CategoryTotals {
                    category: name.to_string(),
                    items: 0,
                    sales: Money::ZERO,
                    cogs: Money::ZERO,
                    gross_margin: Money::ZERO,
                    gross_margin_pct: Rate::ZERO,
                });
                categories.len() - 1
            }
        };
        let entry = &mut categories[idx];
        entry.items += 1;
        entry.sales += line.sales;
        entry.cogs += line.cogs;
    }

    let mut overall = CategoryTotals {
        category: "All".to_string(),
        items: 0,
        sales: Money::ZERO,
        cogs: Money::ZERO,
        gross_margin: Money::ZERO,
        gross_margin_pct: Rate::ZERO,
    };
    for entry in &mut categories {
        entry.gross_margin = entry.sales - entry.cogs;
        entry.gross_margin_pct = safe_pct(entry.gross_margin, entry.sales);
        overall.items += entry.items;
        overall.sales += entry.sales;
        overall.cogs += entry.cogs;
    }
    overall.gross_margin = overall.sales - overall.cogs;
    overall.gross_margin_pct = safe_pct(overall.gross_margin, overall.sales);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Category Gross-Margin Summary",
        input,
        Vec::new(),
        elapsed,
        CategorySummaryOutput {
            categories,
            overall,
        },
    ))
}
