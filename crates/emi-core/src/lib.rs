pub mod amortisation;
pub mod error;
pub mod types;

pub use error::EmiError;
pub use types::*;

/// Standard result type for all emi operations
pub type EmiResult<T> = Result<T, EmiError>;
