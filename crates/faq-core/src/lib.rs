//! faq-core - Records, edit sessions and pagination for a FAQ list.
//!
//! The list itself lives behind the [`Repository`] trait. A [`Board`] keeps
//! the loaded records ([`RecordStore`]), the draft being edited
//! ([`EditSession`]) and the selected page ([`Pagination`]) consistent with
//! each other across every create, update and delete.

pub mod board;
pub mod error;
pub mod memory;
pub mod pagination;
pub mod record;
pub mod session;
pub mod store;
pub mod traits;
pub mod types;

pub use board::{Board, DELETE_PROMPT, DeleteOutcome, SubmitOutcome};
pub use error::{Error, ValidationError};
pub use memory::MemoryRepository;
pub use pagination::{DEFAULT_PAGE_SIZE, PageView, Pagination};
pub use record::{Field, Record, RecordFields};
pub use session::{EditSession, Mode, Saved};
pub use store::RecordStore;
pub use traits::{AutoConfirm, Confirm, Repository};
pub use types::{DEFAULT_LIST_NAME, ListName, ListUrl, RecordId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
