//! Editable field names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// One of the editable fields of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Body,
    Letter,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 3] = [Field::Title, Field::Body, Field::Letter];

    /// Returns the lower-case field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Body => "body",
            Field::Letter => "letter",
        }
    }

    /// Returns the label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Body => "Body",
            Field::Letter => "Letter",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                InvalidInputError::Field {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Title".parse::<Field>().unwrap(), Field::Title);
        assert_eq!(" letter ".parse::<Field>().unwrap(), Field::Letter);
    }

    #[test]
    fn rejects_unknown() {
        assert!("Id".parse::<Field>().is_err());
    }
}
