//! Record identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A repository-assigned record identifier.
///
/// Ids are positive integers handed out by the list service. Zero never
/// names a saved record and is rejected.
///
/// # Example
///
/// ```
/// use faq_core::RecordId;
///
/// let id: RecordId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(RecordId::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
    /// The id services hand out first.
    pub const FIRST: RecordId = RecordId(1);

    /// Create a record id, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is zero.
    pub fn new(value: u64) -> Result<Self, Error> {
        if value == 0 {
            return Err(InvalidInputError::RecordId {
                value: value.to_string(),
                reason: "must be a positive integer".to_string(),
            }
            .into());
        }
        Ok(Self(value))
    }

    /// Returns the id following this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u64>().map_err(|e| InvalidInputError::RecordId {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<u64> for RecordId {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive() {
        let id: RecordId = "7".parse().unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn rejects_zero() {
        assert!(RecordId::new(0).is_err());
        assert!("0".parse::<RecordId>().is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<RecordId>().is_err());
        assert!("-3".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<RecordId>("0").is_err());
        let id: RecordId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
    }
}
