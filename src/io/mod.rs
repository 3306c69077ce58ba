pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod parse;

// Re-export commonly used types
pub use csv_reader::{CsvConfirmationStream, CsvRecordStream, CsvTransactionStream};
pub use csv_writer::write_summary;
pub use error::IoError;
pub use parse::{FromCsvRecord, RawConfirmationRecord, RawTransactionRecord};
