pub mod conversion;
pub mod error;
pub mod insurance;
pub mod payment;
pub mod quote;
pub mod types;
pub mod validation;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-core operations
pub type MortgageResult<T> = Result<T, MortgageError>;
