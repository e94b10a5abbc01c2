//! The board ties the record store, the edit session and pagination to a
//! repository and a confirmation prompt.
//!
//! Every mutating operation takes `&mut self`, so a board never has more than
//! one repository call in flight. Repository failures never escape as errors:
//! they are logged, kept as [`Board::last_failure`], and returned inside the
//! operation's outcome. Validation failures are returned to the caller.

use tracing::{error, info, instrument, warn};

use crate::error::{Error, InvalidInputError, ValidationError};
use crate::pagination::{PageView, Pagination};
use crate::record::{Field, Record};
use crate::session::{EditSession, Saved};
use crate::store::RecordStore;
use crate::traits::{Confirm, Repository};
use crate::types::RecordId;

/// Prompt shown before a record is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Result of [`Board::submit`] once the draft passed validation.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A record was created with this id.
    Created(RecordId),
    /// The record with this id was updated.
    Updated(RecordId),
    /// The repository rejected the save; the draft is unchanged.
    Failed(Error),
}

/// Result of [`Board::delete`].
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt.
    Declined,
    /// The record was deleted.
    Deleted(RecordId),
    /// The repository rejected the delete.
    Failed(Error),
}

/// A FAQ list with its edit session and pagination.
#[derive(Debug)]
pub struct Board<R, C> {
    repo: R,
    confirm: C,
    store: RecordStore,
    session: EditSession,
    pagination: Pagination,
    last_failure: Option<Error>,
}

impl<R, C> Board<R, C>
where
    R: Repository,
    C: Confirm,
{
    /// Create a board with an empty store, on page 1.
    pub fn new(repo: R, confirm: C, pagination: Pagination) -> Self {
        Self {
            repo,
            confirm,
            store: RecordStore::new(),
            session: EditSession::new(),
            pagination,
            last_failure: None,
        }
    }

    /// Initial load.
    pub async fn mount(&mut self) -> bool {
        self.reload().await
    }

    /// Refetch every record. Returns false if the fetch failed, in which
    /// case the previously loaded records are still shown.
    #[instrument(skip(self), fields(list = %self.repo.list_name()))]
    pub async fn reload(&mut self) -> bool {
        match self.store.reload(&self.repo).await {
            Ok(_) => {
                self.last_failure = None;
                true
            }
            Err(e) => {
                error!(error = %e, "Error loading list items");
                self.last_failure = Some(e);
                false
            }
        }
    }

    /// Discard the draft and start a new record.
    pub fn begin_create(&mut self) {
        self.session.begin_create();
    }

    /// Load the record `id` into the session for editing.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not among the loaded records.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), Error> {
        let record = self
            .store
            .get(id)
            .ok_or(InvalidInputError::UnknownRecord { id })?;
        self.session.begin_edit(record);
        Ok(())
    }

    /// Change one draft field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.session.set_field(field, value);
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Save the draft, then reload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the draft is rejected before it
    /// reaches the repository; nothing changes in that case.
    #[instrument(skip(self), fields(list = %self.repo.list_name()))]
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        self.session.validate()?;

        match self.session.submit(&self.repo).await {
            Ok(saved) => {
                self.reload().await;
                Ok(match saved {
                    Saved::Created(record) => SubmitOutcome::Created(record.id),
                    Saved::Updated(id) => SubmitOutcome::Updated(id),
                })
            }
            Err(e) => {
                error!(error = %e, "Error saving item");
                Ok(SubmitOutcome::Failed(self.record_failure(e)))
            }
        }
    }

    /// Ask for confirmation, delete `id`, then reload.
    ///
    /// If the session was editing the deleted record it is cancelled, so a
    /// later submit cannot target an id that no longer exists.
    #[instrument(skip(self), fields(list = %self.repo.list_name()))]
    pub async fn delete(&mut self, id: RecordId) -> DeleteOutcome {
        if !self.confirm.confirm(DELETE_PROMPT) {
            info!(%id, "Delete declined");
            return DeleteOutcome::Declined;
        }

        if let Err(e) = self.repo.remove(id).await {
            error!(error = %e, %id, "Error deleting item");
            return DeleteOutcome::Failed(self.record_failure(e));
        }

        info!(%id, "Deleted record");
        if self.session.target() == Some(id) {
            warn!(%id, "Deleted the record being edited, discarding draft");
            self.session.cancel();
        }

        self.reload().await;
        DeleteOutcome::Deleted(id)
    }

    /// Select page `n`; any page from 1 up is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn set_page(&mut self, n: usize) -> Result<(), Error> {
        self.pagination.set_page(n)
    }

    /// The visible page.
    pub fn page(&self) -> PageView<'_, Record> {
        self.pagination.view(self.store.records())
    }

    /// All loaded records.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// The edit session.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// The pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The repository this board talks to.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// The most recent repository failure, cleared by the next successful
    /// reload.
    pub fn last_failure(&self) -> Option<&Error> {
        self.last_failure.as_ref()
    }

    fn record_failure(&mut self, e: Error) -> Error {
        self.last_failure = Some(e.clone());
        e
    }
}
