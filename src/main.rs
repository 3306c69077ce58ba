use tokio::io::{BufWriter, Stdout};
use tokio_util::sync::CancellationToken;

use tally::prelude::*;

#[tokio::main]
async fn main() {
    let args = match parse_args(std::env::args().collect()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    CliApp::new("tally")
        .with_log_level(args.log_level)
        .run(|writer, token| run_summary(writer, args, token))
        .await
}

/// Sum confirmed transactions from the two CSV files and write the summary
async fn run_summary(
    mut writer: BufWriter<Stdout>,
    args: CliArgs,
    token: CancellationToken,
) -> Result<(), AppError> {
    // Each source reopens its file per run, so the summarizer stays re-runnable
    let summarizer = ConfirmedTransactionSummarizer::new(
        CsvFileSource::<Transaction>::new(&args.transactions),
        CsvFileSource::<Confirmation>::new(&args.confirmations),
    )
    .with_pairing_mode(args.pairing_mode)
    .with_empty_input(args.empty_input);

    let summary = summarizer.summarize_until_cancelled(&token).await?;

    // write_summary flushes the writer
    write_summary(&summary, &mut writer).await?;

    Ok(())
}
