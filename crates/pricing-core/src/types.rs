use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::PricingResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates and discount fractions expressed as decimals (0.20 = 20%). Never as percentages.
pub type Rate = Decimal;

/// Unit counts. Decimal so growth projections stay in one numeric tower.
pub type Qty = Decimal;

/// One row of the product master for a single item.
///
/// Owned and supplied by the catalog loader; the engine only reads it and
/// assumes the loader has already validated column presence and numeric
/// coercion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Item number, e.g. "10482"
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog category for roll-up reporting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Shipping revenue billed per order
    pub shipping_revenue: Money,
    /// Net shipping cost of goods
    pub shipping_cost: Money,
    pub handling_revenue: Money,
    pub handling_cost: Money,
    /// Standard merchandise unit cost
    pub merchandise_cost: Money,
}

/// A fixed per-order charge with its own discount: setup, shipping or
/// handling. Only the revenue side is discounted; the cost passes through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeLine {
    pub list_price: Money,
    pub cost: Money,
    pub discount_fraction: Rate,
}

impl ChargeLine {
    /// Revenue after discount.
    pub fn net_revenue(&self) -> Money {
        self.list_price * (Decimal::ONE - self.discount_fraction)
    }
}

/// A figure that is either shared across all quantity breaks or given per
/// break. Unifies the two input modes the pricing views support.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakValue {
    Shared(Decimal),
    PerBreak(Vec<Decimal>),
}

impl BreakValue {
    /// Expand to exactly one value per quantity break.
    pub fn resolve(&self, field: &str, breaks: usize) -> PricingResult<Vec<Decimal>> {
        match self {
            BreakValue::Shared(v) => Ok(vec![*v; breaks]),
            BreakValue::PerBreak(vs) if vs.len() == breaks => Ok(vs.clone()),
            BreakValue::PerBreak(vs) => Err(PricingError::InvalidInput {
                field: field.to_string(),
                reason: format!(
                    "expected {} per-break values to match quantity_breaks, got {}",
                    breaks,
                    vs.len()
                ),
            }),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
