use rust_decimal::Decimal;

/// A monetary value awaiting confirmation
///
/// Immutable once produced: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: String,
    value: Decimal,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(id: impl Into<String>, value: Decimal) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Opaque transaction identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Transaction value
    pub fn value(&self) -> Decimal {
        self.value
    }
}
