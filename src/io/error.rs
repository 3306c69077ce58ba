use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for CSV parsing and record streams
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid confirmation flag: {0}")]
    InvalidFlag(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
