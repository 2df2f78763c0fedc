//! Receipt number parsing and sequence generation.
//!
//! A USCIS receipt number is a 13-character token: a 3-letter location code
//! (e.g. `YSC`, `MSC`) followed by a 10-digit zero-padded serial. `ReceiptNumber`
//! enforces that format at construction, so every live value is valid.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Total length of a receipt number.
pub const RECEIPT_LEN: usize = 13;
/// Length of the leading location code.
pub const PREFIX_LEN: usize = 3;
/// Largest serial representable in the fixed 10-digit width.
pub const MAX_SERIAL: u64 = 9_999_999_999;

/// Errors from receipt number validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// Token is not exactly 13 characters.
    #[error("receipt number must be {RECEIPT_LEN} characters, got {0}")]
    WrongLength(usize),

    /// First 3 characters are not all letters.
    #[error("receipt number must start with a 3-letter location code: {0:?}")]
    InvalidPrefix(String),

    /// Last 10 characters are not all digits.
    #[error("receipt number must end with a 10-digit serial: {0:?}")]
    InvalidSerial(String),
}

/// A validated 13-character USCIS receipt number.
///
/// Immutable once constructed; build one via [`ReceiptNumber::parse`] or
/// `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptNumber {
    text: String,
    serial: u64,
}

impl ReceiptNumber {
    /// Validate and parse a receipt number token.
    pub fn parse(token: &str) -> Result<Self, ReceiptError> {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != RECEIPT_LEN {
            return Err(ReceiptError::WrongLength(chars.len()));
        }
        if !chars[..PREFIX_LEN].iter().all(|c| c.is_ascii_alphabetic()) {
            return Err(ReceiptError::InvalidPrefix(token.to_string()));
        }
        if !chars[PREFIX_LEN..].iter().all(|c| c.is_ascii_digit()) {
            return Err(ReceiptError::InvalidSerial(token.to_string()));
        }
        // All 13 chars are ASCII at this point, so byte slicing is safe.
        let serial = token[PREFIX_LEN..]
            .parse::<u64>()
            .map_err(|_| ReceiptError::InvalidSerial(token.to_string()))?;
        Ok(Self {
            text: token.to_string(),
            serial,
        })
    }

    /// Build a receipt number from a location code and serial.
    ///
    /// Returns `None` when the serial does not fit the 10-digit width.
    fn from_parts(prefix: &str, serial: u64) -> Option<Self> {
        if serial > MAX_SERIAL {
            return None;
        }
        Some(Self {
            text: format!("{}{:010}", prefix, serial),
            serial,
        })
    }

    /// The 3-letter location code.
    pub fn prefix(&self) -> &str {
        &self.text[..PREFIX_LEN]
    }

    /// The numeric serial (without zero padding).
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ReceiptNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for ReceiptNumber {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for ReceiptNumber {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Generate up to `count` consecutive receipt numbers starting at `start`.
///
/// The sequence shares the start token's location code and increments the
/// serial by one per element. If an increment would overflow the 10-digit
/// width, the sequence is truncated there; that is normal termination, not
/// an error. A malformed `start` token is a [`ReceiptError`].
pub fn generate_sequence(start: &str, count: usize) -> Result<Vec<ReceiptNumber>, ReceiptError> {
    let start = ReceiptNumber::parse(start)?;
    let prefix = start.prefix().to_string();
    let base = start.serial();

    let mut numbers = Vec::with_capacity(count);
    for idx in 0..count as u64 {
        let number = base
            .checked_add(idx)
            .and_then(|serial| ReceiptNumber::from_parts(&prefix, serial));
        match number {
            Some(n) => numbers.push(n),
            None => break,
        }
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let num = ReceiptNumber::parse("YSC2090175300").unwrap();
        assert_eq!(num.prefix(), "YSC");
        assert_eq!(num.serial(), 2_090_175_300);
        assert_eq!(num.as_str(), "YSC2090175300");
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = ReceiptNumber::parse("YSC123").unwrap_err();
        assert_eq!(err, ReceiptError::WrongLength(6));
    }

    #[test]
    fn test_parse_bad_prefix() {
        let err = ReceiptNumber::parse("Y5C2090175300").unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidPrefix(_)));
    }

    #[test]
    fn test_parse_bad_serial() {
        let err = ReceiptNumber::parse("YSC209017530X").unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidSerial(_)));
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        assert!(ReceiptNumber::parse("ÉSC2090175300").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let num: ReceiptNumber = "MSC0000000042".parse().unwrap();
        assert_eq!(num.to_string(), "MSC0000000042");
    }

    #[test]
    fn test_generate_sequence_basic() {
        let numbers = generate_sequence("ABC0000000001", 3).unwrap();
        let tokens: Vec<&str> = numbers.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            tokens,
            vec!["ABC0000000001", "ABC0000000002", "ABC0000000003"]
        );
    }

    #[test]
    fn test_generate_sequence_preserves_padding() {
        let numbers = generate_sequence("ABC0000000009", 2).unwrap();
        assert_eq!(numbers[1].as_str(), "ABC0000000010");
        for n in &numbers {
            assert_eq!(n.as_str().len(), RECEIPT_LEN);
        }
    }

    #[test]
    fn test_generate_sequence_zero_count() {
        let numbers = generate_sequence("YSC2090175300", 0).unwrap();
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_generate_sequence_truncates_on_overflow() {
        // Two steps past the start would exceed the 10-digit width.
        let numbers = generate_sequence("ABC9999999998", 5).unwrap();
        let tokens: Vec<&str> = numbers.iter().map(|n| n.as_str()).collect();
        assert_eq!(tokens, vec!["ABC9999999998", "ABC9999999999"]);
    }

    #[test]
    fn test_generate_sequence_invalid_start_is_fatal() {
        assert!(generate_sequence("not-a-receipt", 3).is_err());
    }

    #[test]
    fn test_generate_sequence_shares_prefix_and_increments() {
        let numbers = generate_sequence("LIN0000012345", 10).unwrap();
        assert_eq!(numbers.len(), 10);
        for (idx, n) in numbers.iter().enumerate() {
            assert_eq!(n.prefix(), "LIN");
            assert_eq!(n.serial(), 12_345 + idx as u64);
        }
    }
}
