//! Record types.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

use super::Field;

/// A record from the list.
///
/// Identity is the repository-assigned `id`; two records with the same id
/// are the same item even if their fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The repository-assigned id.
    pub id: RecordId,

    /// The question.
    pub title: String,

    /// The answer.
    pub body: String,

    /// Index letter the entry is grouped under.
    pub letter: String,
}

impl Record {
    /// Assemble a record from an id and its fields.
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            title: fields.title,
            body: fields.body,
            letter: fields.letter,
        }
    }

    /// Copy out the editable fields.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            title: self.title.clone(),
            body: self.body.clone(),
            letter: self.letter.clone(),
        }
    }

    /// Overwrite the editable fields, keeping the id.
    pub fn apply(&mut self, fields: &RecordFields) {
        self.title = fields.title.clone();
        self.body = fields.body.clone();
        self.letter = fields.letter.clone();
    }
}

/// The editable field set of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub title: String,
    pub body: String,
    pub letter: String,
}

impl RecordFields {
    /// Build a field set from its three values.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        letter: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            letter: letter.into(),
        }
    }

    /// Returns the value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
            Field::Letter => &self.letter,
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Body => &mut self.body,
            Field::Letter => &mut self.letter,
        };
        *slot = value.into();
    }

    /// Returns true if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty() && self.letter.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> RecordId {
        RecordId::new(n).unwrap()
    }

    #[test]
    fn set_touches_one_field() {
        let mut fields = RecordFields::new("Q", "A", "L");
        fields.set(Field::Body, "answer");
        assert_eq!(fields, RecordFields::new("Q", "answer", "L"));
        assert_eq!(fields.get(Field::Body), "answer");
    }

    #[test]
    fn record_fields_round_trip() {
        let record = Record::new(id(3), RecordFields::new("Q", "A", "L"));
        assert_eq!(record.fields(), RecordFields::new("Q", "A", "L"));
    }

    #[test]
    fn apply_keeps_id() {
        let mut record = Record::new(id(3), RecordFields::new("Q", "A", "L"));
        record.apply(&RecordFields::new("Q2", "A2", "M"));
        assert_eq!(record.id, id(3));
        assert_eq!(record.title, "Q2");
        assert_eq!(record.letter, "M");
    }

    #[test]
    fn default_is_empty() {
        assert!(RecordFields::default().is_empty());
        assert!(!RecordFields::new("", "", "x").is_empty());
    }
}
