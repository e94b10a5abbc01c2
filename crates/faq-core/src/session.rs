//! Edit session: the draft being composed and what it will be saved as.

use tracing::{debug, info, instrument};

use crate::Result;
use crate::error::ValidationError;
use crate::record::{Field, Record, RecordFields};
use crate::traits::Repository;
use crate::types::RecordId;

/// Whether a submit creates a record or updates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update(RecordId),
}

/// What a successful submit saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    /// A new record was created with this id.
    Created(Record),
    /// The record with this id was overwritten.
    Updated(RecordId),
}

impl Saved {
    /// The id of the saved record.
    pub fn id(&self) -> RecordId {
        match self {
            Saved::Created(record) => record.id,
            Saved::Updated(id) => *id,
        }
    }
}

/// The in-progress draft.
///
/// With no target the draft describes a new record; with a target it is an
/// edit of that record. The draft is a copy: nothing reaches the repository
/// until [`submit`](Self::submit) succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    target: Option<RecordId>,
    draft: RecordFields,
}

impl EditSession {
    /// Create an empty session in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the draft and switch to create mode.
    pub fn begin_create(&mut self) {
        self.target = None;
        self.draft = RecordFields::default();
    }

    /// Load a snapshot of `record` for editing.
    pub fn begin_edit(&mut self, record: &Record) {
        self.target = Some(record.id);
        self.draft = record.fields();
    }

    /// Change one draft field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Same as [`begin_create`](Self::begin_create).
    pub fn cancel(&mut self) {
        self.begin_create();
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        match self.target {
            Some(id) => Mode::Update(id),
            None => Mode::Create,
        }
    }

    /// The record being edited, if any.
    pub fn target(&self) -> Option<RecordId> {
        self.target
    }

    /// Returns true in update mode.
    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// The draft field values.
    pub fn draft(&self) -> &RecordFields {
        &self.draft
    }

    /// Check the draft without saving it.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.draft.title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        Ok(())
    }

    /// Save the draft through `repo`.
    ///
    /// An empty title fails validation before any repository call. On success
    /// the session returns to create mode; on a repository failure the draft
    /// and target are kept so the caller can retry.
    #[instrument(skip(self, repo), fields(list = %repo.list_name(), mode = ?self.mode()))]
    pub async fn submit<R>(&mut self, repo: &R) -> Result<Saved>
    where
        R: Repository + ?Sized,
    {
        self.validate()?;

        let saved = match self.target {
            None => {
                debug!("Creating record");
                Saved::Created(repo.create(&self.draft).await?)
            }
            Some(id) => {
                debug!(%id, "Updating record");
                repo.update(id, &self.draft).await?;
                Saved::Updated(id)
            }
        };

        info!(id = %saved.id(), "Saved record");
        self.begin_create();
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::memory::{MemoryRepository, Operation};

    fn record(id: u64, title: &str) -> Record {
        Record::new(
            RecordId::new(id).unwrap(),
            RecordFields::new(title, "body", "B"),
        )
    }

    #[test]
    fn starts_in_create_mode() {
        let session = EditSession::new();
        assert_eq!(session.mode(), Mode::Create);
        assert!(session.draft().is_empty());
    }

    #[test]
    fn begin_edit_takes_a_snapshot() {
        let mut original = record(4, "Q");
        let mut session = EditSession::new();
        session.begin_edit(&original);

        original.title = "changed".to_string();

        assert_eq!(session.mode(), Mode::Update(RecordId::new(4).unwrap()));
        assert_eq!(session.draft().title, "Q");
    }

    #[test]
    fn set_field_changes_only_that_field() {
        let mut session = EditSession::new();
        session.begin_edit(&record(1, "Q"));
        session.set_field(Field::Letter, "Z");
        assert_eq!(session.draft(), &RecordFields::new("Q", "body", "Z"));
        assert!(session.is_editing());
    }

    #[test]
    fn cancel_discards_everything() {
        let mut session = EditSession::new();
        session.begin_edit(&record(1, "Q"));
        session.cancel();
        assert_eq!(session, EditSession::new());
    }

    #[tokio::test]
    async fn empty_title_never_reaches_repository() {
        let repo = MemoryRepository::default();
        let mut session = EditSession::new();
        session.set_field(Field::Body, "orphan answer");

        let err = session.submit(&repo).await.unwrap_err();

        assert!(matches!(err, Error::Validation(ValidationError::TitleRequired)));
        assert_eq!(repo.total_calls(), 0);
        assert_eq!(session.draft().body, "orphan answer");
    }

    #[tokio::test]
    async fn create_resets_session() {
        let repo = MemoryRepository::default();
        let mut session = EditSession::new();
        session.set_field(Field::Title, "Q1");

        let saved = session.submit(&repo).await.unwrap();

        assert!(matches!(saved, Saved::Created(ref r) if r.title == "Q1"));
        assert_eq!(session, EditSession::new());
    }

    #[tokio::test]
    async fn failed_update_keeps_draft() {
        let repo = MemoryRepository::with_records([RecordFields::new("Q", "A", "L")]);
        let mut session = EditSession::new();
        session.begin_edit(&repo.snapshot()[0]);
        session.set_field(Field::Title, "Q edited");
        repo.fail_next(Operation::Update);

        assert!(session.submit(&repo).await.is_err());

        assert_eq!(session.mode(), Mode::Update(RecordId::FIRST));
        assert_eq!(session.draft().title, "Q edited");
        assert_eq!(repo.snapshot()[0].title, "Q");
    }
}
