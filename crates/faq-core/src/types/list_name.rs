//! List name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The list every front end opens when none is named.
pub const DEFAULT_LIST_NAME: &str = "FAQ";

/// A validated list title.
///
/// List titles are what the list service addresses a list by. They must be
/// non-empty, at most 255 characters and free of control characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListName(String);

impl ListName {
    /// Create a new list name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, too long or contains control
    /// characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the list name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a file name stem that names this list and no other.
    ///
    /// Lower-case ASCII letters, digits and `-` are kept. An upper-case
    /// letter becomes `_` followed by its lower-case form, and every other
    /// byte becomes `%` and two lower-case hex digits. The result is
    /// all lower-case, so it stays distinct on case-insensitive filesystems.
    pub fn file_stem(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            match c {
                'a'..='z' | '0'..='9' | '-' => out.push(c),
                'A'..='Z' => {
                    out.push('_');
                    out.push(c.to_ascii_lowercase());
                }
                _ => {
                    let mut buf = [0u8; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        out.push_str(&format!("%{:02x}", byte));
                    }
                }
            }
        }
        out
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.trim().is_empty() {
            Some("cannot be empty")
        } else if s.chars().count() > 255 {
            Some("exceeds maximum length of 255 characters")
        } else if s.chars().any(char::is_control) {
            Some("contains control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidInputError::ListName {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl Default for ListName {
    fn default() -> Self {
        Self(DEFAULT_LIST_NAME.to_string())
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ListName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ListName> for String {
    fn from(name: ListName) -> Self {
        name.0
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
