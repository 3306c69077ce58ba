use std::io;
use thiserror::Error;

use crate::io::IoError;
use crate::streaming::SummarizationError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error("Summarization error: {0}")]
    Summarization(#[from] SummarizationError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            AppError::InvalidArguments("missing file".to_string()).to_string(),
            "Invalid arguments: missing file"
        );
        assert_eq!(
            AppError::from(SummarizationError::Source("disk error".to_string())).to_string(),
            "Summarization error: disk error"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err = AppError::from(io_err);

        match app_err {
            AppError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn summarization_error_conversion() {
        let app_err = AppError::from(SummarizationError::EmptyInput);

        match app_err {
            AppError::Summarization(SummarizationError::EmptyInput) => {}
            _ => panic!("Expected Summarization error variant"),
        }
    }
}
