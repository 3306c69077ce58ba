use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use super::error::AppError;
use crate::streaming::{EmptyInput, PairingMode};

pub const USAGE: &str = "Usage: tally <transactions.csv> <confirmations.csv> \
[--match-ids] [--empty-as-zero] [--log-level=<error|warn|info|debug|trace>]";

/// Validated command-line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub transactions: PathBuf,
    pub confirmations: PathBuf,
    pub pairing_mode: PairingMode,
    pub empty_input: EmptyInput,
    pub log_level: LevelFilter,
}

/// Parse and validate command-line arguments (the first one is the program name)
pub fn parse_args(args: Vec<String>) -> Result<CliArgs, AppError> {
    let mut files = Vec::new();
    let mut pairing_mode = PairingMode::default();
    let mut empty_input = EmptyInput::default();
    let mut log_level = LevelFilter::WARN;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--match-ids" => pairing_mode = PairingMode::MatchIds,
            "--empty-as-zero" => empty_input = EmptyInput::Zero,
            _ => {
                if let Some(level) = arg.strip_prefix("--log-level=") {
                    log_level = parse_log_level(level)?;
                } else if arg.starts_with("--") {
                    return Err(AppError::InvalidArguments(format!(
                        "unknown option {arg}\n{USAGE}"
                    )));
                } else {
                    files.push(PathBuf::from(arg));
                }
            }
        }
    }

    let [transactions, confirmations]: [PathBuf; 2] = files
        .try_into()
        .map_err(|_| AppError::InvalidArguments(USAGE.to_string()))?;

    Ok(CliArgs {
        transactions,
        confirmations,
        pairing_mode,
        empty_input,
        log_level,
    })
}

fn parse_log_level(level: &str) -> Result<LevelFilter, AppError> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::InvalidArguments(format!("invalid log level '{level}'")))
}
