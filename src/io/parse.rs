use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::IoError;
use crate::domain::{Confirmation, Transaction, parse_amount};

/// A record type that can be read from one CSV row
pub trait FromCsvRecord: Sized + Send + 'static {
    /// Row shape as deserialized by csv-async
    type Raw: DeserializeOwned + Send + 'static;

    /// Convert the raw row into a validated record
    fn from_raw(raw: Self::Raw) -> Result<Self, IoError>;
}

/// Raw transaction row: `id,value`
#[derive(Debug, Deserialize)]
pub struct RawTransactionRecord {
    pub id: String,
    pub value: Option<String>,
}

/// Raw confirmation row: `id,confirmed`
#[derive(Debug, Deserialize)]
pub struct RawConfirmationRecord {
    pub id: String,
    pub confirmed: Option<String>,
}

impl RawTransactionRecord {
    /// Parse this raw record into a Transaction
    pub fn parse(self) -> Result<Transaction, IoError> {
        let value_str = self
            .value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| IoError::MissingField(format!("value for transaction {}", self.id)))?;
        let value = parse_amount(&value_str)?;
        Ok(Transaction::new(self.id, value))
    }
}

impl RawConfirmationRecord {
    /// Parse this raw record into a Confirmation
    pub fn parse(self) -> Result<Confirmation, IoError> {
        let flag = self
            .confirmed
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                IoError::MissingField(format!("confirmed for confirmation {}", self.id))
            })?;
        let is_confirmed = parse_flag(&flag)?;
        Ok(Confirmation::new(self.id, is_confirmed))
    }
}

fn parse_flag(flag: &str) -> Result<bool, IoError> {
    match flag.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(IoError::InvalidFlag(flag.to_string())),
    }
}

impl FromCsvRecord for Transaction {
    type Raw = RawTransactionRecord;

    fn from_raw(raw: Self::Raw) -> Result<Self, IoError> {
        raw.parse()
    }
}

impl FromCsvRecord for Confirmation {
    type Raw = RawConfirmationRecord;

    fn from_raw(raw: Self::Raw) -> Result<Self, IoError> {
        raw.parse()
    }
}
