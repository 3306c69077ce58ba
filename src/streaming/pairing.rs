use futures::{Stream, StreamExt, stream};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::error::SummarizationError;
use super::source::SourceError;
use crate::domain::{Confirmation, Transaction, contribution};

/// How transactions are associated with confirmations
///
/// Association is always by position: the Nth transaction goes with the
/// Nth confirmation and pairing stops when either side runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// Pair by position only - DEFAULT
    #[default]
    Positional,

    /// Pair by position and abort if the two ids differ
    MatchIds,
}

/// A transaction together with its positional confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub position: usize,
    pub transaction: Transaction,
    pub confirmation: Confirmation,
}

impl Pair {
    /// Value this pair adds to the total
    pub fn contribution(&self) -> Decimal {
        contribution(&self.transaction, &self.confirmation)
    }
}

/// Pull both record streams in lockstep and yield positional pairs
///
/// Every step pulls one item from each side. A failure pulled from either
/// side is yielded even when the other side has already ended, and the
/// stream ends after it. When both sides fail at the same position the
/// transaction side is reported. Pairing stops cleanly when either side
/// runs out.
pub fn pair_records<T, C>(
    transactions: T,
    confirmations: C,
    mode: PairingMode,
) -> impl Stream<Item = Result<Pair, SummarizationError>>
where
    T: Stream<Item = Result<Transaction, SourceError>>,
    C: Stream<Item = Result<Confirmation, SourceError>>,
{
    let sides = Some((Box::pin(transactions), Box::pin(confirmations), 0usize));

    stream::unfold(sides, move |sides| async move {
        let Some((mut transactions, mut confirmations, position)) = sides else {
            return None;
        };

        let item = match (transactions.next().await, confirmations.next().await) {
            (Some(Err(e)), _) => Err(source_failure("transactions", position, e)),
            (_, Some(Err(e))) => Err(source_failure("confirmations", position, e)),
            (Some(Ok(transaction)), Some(Ok(confirmation))) => {
                pair(position, transaction, confirmation, mode)
            }
            _ => return None,
        };

        let next = item
            .is_ok()
            .then(|| (transactions, confirmations, position + 1));
        Some((item, next))
    })
}

fn pair(
    position: usize,
    transaction: Transaction,
    confirmation: Confirmation,
    mode: PairingMode,
) -> Result<Pair, SummarizationError> {
    if mode == PairingMode::MatchIds && transaction.id() != confirmation.id() {
        debug!(
            position,
            transaction_id = transaction.id(),
            confirmation_id = confirmation.id(),
            "Pair id mismatch"
        );
        return Err(SummarizationError::IdMismatch {
            position,
            transaction_id: transaction.id().to_string(),
            confirmation_id: confirmation.id().to_string(),
        });
    }

    trace!(
        position,
        transaction_id = transaction.id(),
        confirmed = confirmation.is_confirmed(),
        "Paired records"
    );

    Ok(Pair {
        position,
        transaction,
        confirmation,
    })
}

fn source_failure(side: &'static str, position: usize, error: SourceError) -> SummarizationError {
    debug!(side, position, error = %error, "Source failed");
    SummarizationError::Source(error.to_string())
}
