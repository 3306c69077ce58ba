use thiserror::Error;

use crate::domain::DomainError;

/// The single error kind produced by a summarization run
///
/// Failures raised by either record source are carried as `Source` with
/// the original message unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizationError {
    #[error("{0}")]
    Source(String),

    #[error("No transaction/confirmation pairs to summarize")]
    EmptyInput,

    #[error("Total exceeds the decimal range")]
    Overflow,

    #[error(
        "Pair {position}: transaction {transaction_id} does not match confirmation {confirmation_id}"
    )]
    IdMismatch {
        position: usize,
        transaction_id: String,
        confirmation_id: String,
    },

    #[error("Summarization cancelled")]
    Cancelled,

    #[error("Summarization task failed: {0}")]
    TaskFailed(String),
}

impl SummarizationError {
    /// Human-readable description of the failure
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<DomainError> for SummarizationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Overflow => Self::Overflow,
            other => Self::Source(other.to_string()),
        }
    }
}
