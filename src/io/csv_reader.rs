use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::FromCsvRecord;
use crate::domain::{Confirmation, Transaction};

/// Async stream of records from CSV input
pub struct CsvRecordStream<T: FromCsvRecord> {
    inner: Pin<Box<dyn Stream<Item = Result<T, IoError>> + Send>>,
}

/// Transactions read from `id,value` CSV rows
pub type CsvTransactionStream = CsvRecordStream<Transaction>;

/// Confirmations read from `id,confirmed` CSV rows
pub type CsvConfirmationStream = CsvRecordStream<Confirmation>;

impl<T: FromCsvRecord> CsvRecordStream<T> {
    /// Create a new record stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<T::Raw>()
            .map(|result| result.map_err(IoError::from).and_then(T::from_raw));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new record stream from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let stream = CsvTransactionStream::from_file("transactions.csv").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl<T: FromCsvRecord> Stream for CsvRecordStream<T> {
    type Item = Result<T, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
