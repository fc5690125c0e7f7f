use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Unit metrics
// ---------------------------------------------------------------------------

/// Scalar parameters for the unit-metrics primitive. The JS side passes
/// decimals as strings to keep full precision across the boundary.
#[derive(Deserialize)]
struct UnitMetricsParams {
    list_price: Decimal,
    unit_cost: Decimal,
    discount_fraction: Decimal,
}

#[napi]
pub fn unit_metrics(input_json: String) -> NapiResult<String> {
    let params: UnitMetricsParams = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pricing_core::margin::compute_unit_metrics(
        params.list_price,
        params.unit_cost,
        params.discount_fraction,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Report views
// ---------------------------------------------------------------------------

#[napi]
pub fn build_detail_table(input_json: String) -> NapiResult<String> {
    let input: pricing_core::detail::DetailTableInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pricing_core::detail::build_detail_table(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_scenario(input_json: String) -> NapiResult<String> {
    let input: pricing_core::scenario::ScenarioInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pricing_core::scenario::project_scenario(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_categories(input_json: String) -> NapiResult<String> {
    let input: pricing_core::summary::CategorySummaryInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pricing_core::summary::summarize_categories(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_aov(input_json: String) -> NapiResult<String> {
    let input: pricing_core::aov::AovInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pricing_core::aov::project_aov(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
