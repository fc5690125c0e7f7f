pub mod error;
pub mod margin;
pub mod types;

#[cfg(feature = "detail")]
pub mod detail;

#[cfg(feature = "scenario")]
pub mod scenario;

#[cfg(feature = "summary")]
pub mod summary;

#[cfg(feature = "aov")]
pub mod aov;

pub use error::PricingError;
pub use types::*;

/// Standard result type for all pricing operations
pub type PricingResult<T> = Result<T, PricingError>;
