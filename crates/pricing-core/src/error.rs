use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PricingError {
    fn from(e: serde_json::Error) -> Self {
        PricingError::SerializationError(e.to_string())
    }
}
