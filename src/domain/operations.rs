use rust_decimal::Decimal;

use super::confirmation::Confirmation;
use super::error::DomainError;
use super::transaction::Transaction;

/// Value a transaction contributes to the total given its confirmation
///
/// Unconfirmed transactions contribute the additive identity.
pub fn contribution(transaction: &Transaction, confirmation: &Confirmation) -> Decimal {
    if confirmation.is_confirmed() {
        transaction.value()
    } else {
        Decimal::ZERO
    }
}

/// Fold one contribution into a running total
///
/// Without a running total the contribution itself starts the fold, so an
/// empty fold stays `None` instead of collapsing to zero.
pub fn accumulate(total: Option<Decimal>, contribution: Decimal) -> Result<Decimal, DomainError> {
    match total {
        None => Ok(contribution),
        Some(total) => total
            .checked_add(contribution)
            .ok_or(DomainError::Overflow),
    }
}
