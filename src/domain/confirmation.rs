/// Acknowledgment of a transaction, associated with it by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    id: String,
    is_confirmed: bool,
}

impl Confirmation {
    /// Create a new confirmation
    pub fn new(id: impl Into<String>, is_confirmed: bool) -> Self {
        Self {
            id: id.into(),
            is_confirmed,
        }
    }

    /// Shorthand for a positive confirmation
    pub fn confirmed(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    /// Shorthand for a rejected confirmation
    pub fn rejected(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }
}
