use thiserror::Error;

/// Domain-level errors for record values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    #[error("Arithmetic overflow")]
    Overflow,
}
