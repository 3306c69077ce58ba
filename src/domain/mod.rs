pub mod amount;
pub mod confirmation;
pub mod error;
pub mod operations;
pub mod transaction;

// Re-export commonly used types
pub use amount::{format_amount, parse_amount};
pub use confirmation::Confirmation;
pub use error::DomainError;
pub use operations::{accumulate, contribution};
pub use transaction::Transaction;
