use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, TryStreamExt, future};
use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::SummarizationError;
use super::pairing::{Pair, PairingMode, pair_records};
use super::source::RecordSource;
use crate::domain::{Confirmation, Transaction, accumulate};

/// What to report when no pair was formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInput {
    /// Fail with `SummarizationError::EmptyInput` - DEFAULT
    #[default]
    Error,

    /// Report a zero total
    Zero,
}

/// Outcome of a successful summarization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of the values of confirmed transactions
    pub total: Decimal,
    /// Number of pairs consumed
    pub pairs: usize,
    /// Number of pairs whose confirmation was positive
    pub confirmed: usize,
}

/// Sums the values of confirmed transactions
///
/// Transactions and confirmations are read from two independent sources and
/// associated by position. Each run opens both sources once, folds the
/// contributions of all pairs, and yields exactly one total or one error.
///
/// # Example
/// ```rust,ignore
/// let summarizer = ConfirmedTransactionSummarizer::new(transactions, confirmations)
///     .with_pairing_mode(PairingMode::MatchIds);
///
/// let total = summarizer.summarize_confirmed_transactions().await?;
/// ```
pub struct ConfirmedTransactionSummarizer<T, C> {
    transactions: T,
    confirmations: C,
    pairing_mode: PairingMode,
    empty_input: EmptyInput,
}

impl<T, C> ConfirmedTransactionSummarizer<T, C>
where
    T: RecordSource<Transaction>,
    C: RecordSource<Confirmation>,
{
    /// Create a summarizer over two record sources
    pub fn new(transactions: T, confirmations: C) -> Self {
        Self {
            transactions,
            confirmations,
            pairing_mode: PairingMode::default(),
            empty_input: EmptyInput::default(),
        }
    }

    /// Set how pairs are checked (defaults to Positional)
    pub fn with_pairing_mode(mut self, mode: PairingMode) -> Self {
        self.pairing_mode = mode;
        self
    }

    /// Set what an empty input yields (defaults to Error)
    pub fn with_empty_input(mut self, policy: EmptyInput) -> Self {
        self.empty_input = policy;
        self
    }

    /// Total value of all confirmed transactions
    pub async fn summarize_confirmed_transactions(&self) -> Result<Decimal, SummarizationError> {
        self.summarize().await.map(|summary| summary.total)
    }

    /// Total value of confirmed transactions plus pair counts
    pub async fn summarize(&self) -> Result<Summary, SummarizationError> {
        debug!(mode = ?self.pairing_mode, "Opening transaction and confirmation sources");

        let pairs = pair_records(
            self.transactions.open(),
            self.confirmations.open(),
            self.pairing_mode,
        );

        let result = fold_pairs(pairs).await.and_then(|fold| self.finish(fold));

        match &result {
            Ok(summary) => debug!(
                total = %summary.total,
                pairs = summary.pairs,
                confirmed = summary.confirmed,
                "Summarization complete"
            ),
            Err(e) => warn!(error = %e, "Summarization failed"),
        }

        result
    }

    /// Summarize unless the token fires first
    ///
    /// On cancellation both sources are dropped and any in-flight pair is
    /// discarded.
    pub async fn summarize_until_cancelled(
        &self,
        token: &CancellationToken,
    ) -> Result<Summary, SummarizationError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Summarization cancelled");
                Err(SummarizationError::Cancelled)
            }
            result = self.summarize() => result,
        }
    }

    /// Run the summarization on its own tokio task
    pub fn spawn(self) -> SummaryHandle
    where
        T: 'static,
        C: 'static,
    {
        SummaryHandle {
            inner: tokio::spawn(async move { self.summarize().await }),
        }
    }

    fn finish(&self, fold: Fold) -> Result<Summary, SummarizationError> {
        let total = match (fold.total, self.empty_input) {
            (Some(total), _) => total,
            (None, EmptyInput::Zero) => Decimal::ZERO,
            (None, EmptyInput::Error) => return Err(SummarizationError::EmptyInput),
        };

        Ok(Summary {
            total,
            pairs: fold.pairs,
            confirmed: fold.confirmed,
        })
    }
}

/// Running state of the seedless fold
#[derive(Debug, Default)]
struct Fold {
    total: Option<Decimal>,
    pairs: usize,
    confirmed: usize,
}

impl Fold {
    fn absorb(mut self, pair: Pair) -> Result<Self, SummarizationError> {
        self.total = Some(accumulate(self.total, pair.contribution())?);
        self.pairs += 1;
        if pair.confirmation.is_confirmed() {
            self.confirmed += 1;
        }
        Ok(self)
    }
}

async fn fold_pairs<S>(pairs: S) -> Result<Fold, SummarizationError>
where
    S: Stream<Item = Result<Pair, SummarizationError>>,
{
    pairs
        .try_fold(Fold::default(), |fold, pair| future::ready(fold.absorb(pair)))
        .await
}

/// Handle to a spawned summarization, resolving to its single result
pub struct SummaryHandle {
    inner: JoinHandle<Result<Summary, SummarizationError>>,
}

impl SummaryHandle {
    /// Stop the task; awaiting the handle then yields `Cancelled`
    pub fn abort(&self) {
        self.inner.abort();
    }
}

impl Future for SummaryHandle {
    type Output = Result<Summary, SummarizationError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SummarizationError::Cancelled),
            Err(e) => Err(SummarizationError::TaskFailed(e.to_string())),
        })
    }
}
