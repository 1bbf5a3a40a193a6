// Engine error types
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A price input was missing, zero, negative, or non-finite. The
    /// message is fixed: the HTTP layer forwards it verbatim.
    #[error("Invalid prices")]
    InvalidPrices,

    #[error("Calculation produced a non-finite {field}")]
    NonFiniteResult { field: &'static str },
}
