pub mod error;
pub mod pairing;
pub mod source;
pub mod summarizer;

// Re-export commonly used types
pub use error::SummarizationError;
pub use pairing::{Pair, PairingMode, pair_records};
pub use source::{
    CsvFileSource, FnSource, IterSource, RecordSource, RecordStream, SourceError, from_fn,
    from_iter,
};
pub use summarizer::{ConfirmedTransactionSummarizer, EmptyInput, Summary, SummaryHandle};
