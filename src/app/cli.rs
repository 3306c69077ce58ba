use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tokio_util::sync::CancellationToken;
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};

use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Logging setup (stderr, stdout carries results)
/// - Signal handling (SIGINT, SIGTERM, SIGHUP) via a cancellation token
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
    log_level: LevelFilter,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            log_level: LevelFilter::WARN,
        }
    }

    /// Set the maximum level of log events written to stderr
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Run the CLI application with logging, signal handling and exit codes
    ///
    /// The main function receives a buffered stdout writer and a token that
    /// is cancelled when a termination signal arrives. It is responsible for
    /// flushing the writer.
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(BufWriter<Stdout>, CancellationToken) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        self.init_logging();
        debug!(app = %self.name, "Starting");

        let writer = BufWriter::new(tokio::io::stdout());
        let token = CancellationToken::new();

        let main = main_fn(writer, token.clone());
        let code = run_until_signal(main, wait_for_signal(), &token).await;
        std::process::exit(code);
    }

    fn init_logging(&self) {
        // stdout is reserved for the summary output
        let initialized = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_max_level(self.log_level)
            .try_init();

        if initialized.is_err() {
            eprintln!("{}: logging already initialized", self.name);
        }
    }
}

/// Drive the main future to completion, cancelling it when a signal arrives
///
/// After a signal the token is cancelled and the main future is still
/// awaited so it can wind down. The signal's exit code wins over its result.
async fn run_until_signal<Fut, S>(main: Fut, signal: S, token: &CancellationToken) -> i32
where
    Fut: Future<Output = Result<(), AppError>>,
    S: Future<Output = i32>,
{
    tokio::pin!(main);

    let signal_code = tokio::select! {
        result = &mut main => return exit_code(&result),
        signal_code = signal => signal_code,
    };

    token.cancel();
    if let Err(e) = main.await {
        debug!(error = %e, "Stopped after signal");
    }
    signal_code
}

/// Map the application result to a process exit code, reporting errors
fn exit_code(result: &Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
        let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

        tokio::select! {
            _ = sigterm.recv() => {
                warn!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                warn!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                warn!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to setup Ctrl+C handler");
        warn!("Received Ctrl+C");
        130
    }
}
