//! Prelude module for convenient imports
//!
//! Import everything you need with: `use tally::prelude::*;`

// Domain types
pub use crate::domain::{Confirmation, DomainError, Transaction};

// IO types
pub use crate::io::{
    CsvConfirmationStream, CsvRecordStream, CsvTransactionStream, IoError, write_summary,
};

// Streaming types
pub use crate::streaming::{
    ConfirmedTransactionSummarizer, CsvFileSource, EmptyInput, IterSource, PairingMode,
    RecordSource, SourceError, SummarizationError, Summary, SummaryHandle, from_fn, from_iter,
};

// App types
pub use crate::app::{AppError, CliApp, CliArgs, parse_args};
