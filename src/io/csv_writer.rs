use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::format_amount;
use crate::streaming::Summary;

/// Write a summary as a single-row CSV (`total,pairs,confirmed`)
pub async fn write_summary<W>(summary: &Summary, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let output = format!(
        "total,pairs,confirmed\n{},{},{}\n",
        format_amount(summary.total),
        summary.pairs,
        summary.confirmed
    );

    writer.write_all(output.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn writes_summary_row() {
        let summary = Summary {
            total: dec!(12.00),
            pairs: 3,
            confirmed: 2,
        };
        let mut output = Vec::new();

        write_summary(&summary, &mut output).await.unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "total,pairs,confirmed\n12.00,3,2\n");
    }

    #[tokio::test]
    async fn pads_whole_totals() {
        let summary = Summary {
            total: Decimal::ZERO,
            pairs: 0,
            confirmed: 0,
        };
        let mut output = Vec::new();

        write_summary(&summary, &mut output).await.unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.ends_with("0.00,0,0\n"));
    }
}
