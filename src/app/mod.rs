pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cli::CliApp;
pub use config::{CliArgs, USAGE, parse_args};
pub use error::AppError;
