use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::DomainError;

/// Parse a monetary value from its decimal string form (e.g., "10.50")
///
/// Values keep the precision they were written with. Negative values are
/// rejected since transaction values are non-negative by convention.
pub fn parse_amount(s: &str) -> Result<Decimal, DomainError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(DomainError::InvalidAmount(s.to_string()));
    }

    let value = Decimal::from_str(s).map_err(|_| DomainError::InvalidAmount(s.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::NegativeAmount(s.to_string()));
    }

    Ok(value)
}

/// Render an amount with at least two fractional digits
pub fn format_amount(value: Decimal) -> String {
    if value.scale() < 2 {
        let mut padded = value;
        padded.rescale(2);
        padded.to_string()
    } else {
        value.to_string()
    }
}
