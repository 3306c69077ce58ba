use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use futures::stream::{self, BoxStream};
use futures::{Stream, StreamExt, future};
use tracing::debug;

use crate::io::{CsvRecordStream, FromCsvRecord};

/// Any failure raised while producing records
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// A lazily produced sequence of records
pub type RecordStream<T> = BoxStream<'static, Result<T, SourceError>>;

/// Producer of fresh record streams
///
/// `open` is called once per summarization attempt and must return a new
/// stream each time.
pub trait RecordSource<T>: Send + Sync {
    fn open(&self) -> RecordStream<T>;
}

impl<T, S> RecordSource<T> for Arc<S>
where
    S: RecordSource<T> + ?Sized,
{
    fn open(&self) -> RecordStream<T> {
        (**self).open()
    }
}

/// Source backed by a stream factory closure
pub struct FnSource<F> {
    factory: F,
}

/// Wrap a closure returning a stream as a [`RecordSource`]
///
/// # Example
/// ```rust,ignore
/// let source = from_fn(|| stream::iter(vec![Ok::<_, IoError>(tx)]));
/// ```
pub fn from_fn<F>(factory: F) -> FnSource<F> {
    FnSource { factory }
}

impl<T, F, S, E> RecordSource<T> for FnSource<F>
where
    F: Fn() -> S + Send + Sync,
    S: Stream<Item = Result<T, E>> + Send + 'static,
    E: Into<SourceError>,
    T: Send + 'static,
{
    fn open(&self) -> RecordStream<T> {
        (self.factory)()
            .map(|result| result.map_err(Into::into))
            .boxed()
    }
}

/// In-memory source replaying the same items on every open
///
/// Errors are given as plain messages and surface at their position.
#[derive(Debug, Clone)]
pub struct IterSource<T> {
    items: Vec<Result<T, String>>,
}

/// Build an [`IterSource`] from records and failure messages
pub fn from_iter<T, I>(items: I) -> IterSource<T>
where
    I: IntoIterator<Item = Result<T, String>>,
{
    IterSource {
        items: items.into_iter().collect(),
    }
}

impl<T> IterSource<T> {
    /// Build a source from records only
    pub fn ok(records: impl IntoIterator<Item = T>) -> Self {
        from_iter(records.into_iter().map(Ok))
    }
}

impl<T> RecordSource<T> for IterSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn open(&self) -> RecordStream<T> {
        stream::iter(self.items.clone())
            .map(|result| result.map_err(SourceError::from))
            .boxed()
    }
}

/// Source reading records from a CSV file, reopened on every call
#[derive(Debug, Clone)]
pub struct CsvFileSource<T> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> CsvFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _phantom: PhantomData,
        }
    }
}

impl<T: FromCsvRecord> RecordSource<T> for CsvFileSource<T> {
    fn open(&self) -> RecordStream<T> {
        let path = self.path.clone();
        debug!(path = %path.display(), "Opening CSV source");

        stream::once(async move { CsvRecordStream::<T>::from_file(path).await })
            .map(|opened| match opened {
                Ok(records) => records
                    .map(|result| result.map_err(SourceError::from))
                    .boxed(),
                // Open failures become the stream's only item
                Err(e) => stream::once(future::ready(Err(SourceError::from(e)))).boxed(),
            })
            .flatten()
            .boxed()
    }
}
