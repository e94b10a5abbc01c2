//! Filesystem storage for file-backed lists.
//!
//! Each list is one JSON document under `<root>/lists/`. Writers serialize
//! through an exclusive lock on a sidecar `.lock` file and replace the
//! document atomically, so readers never see a half-written list.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use faq_core::Result;
use faq_core::error::{Error, ProtocolError, TransportError};
use faq_core::record::{Record, RecordFields};
use faq_core::types::{ListName, RecordId};

fn map_json(err: serde_json::Error) -> Error {
    Error::Transport(TransportError::Decode {
        message: err.to_string(),
    })
}

/// The stored form of one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDocument {
    /// The list title, as given when the list was first written.
    pub title: String,
    /// The id the next created item receives. Ids are never reused.
    pub next_id: RecordId,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: Option<String>,
    /// Items in insertion order.
    pub items: Vec<Record>,
}

impl ListDocument {
    /// An empty list that has never been written.
    pub fn empty(list: &ListName) -> Self {
        Self {
            title: list.to_string(),
            next_id: RecordId::FIRST,
            updated_at: None,
            items: Vec::new(),
        }
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.items
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ProtocolError::item_not_found(id).into())
    }
}

/// Filesystem-backed storage for local lists.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the directory holding list documents.
    fn lists_dir(&self) -> PathBuf {
        self.root.join("lists")
    }

    /// Get the document path for a list.
    pub fn list_path(&self, list: &ListName) -> PathBuf {
        self.lists_dir().join(format!("{}.json", list.file_stem()))
    }

    /// Get the lock file path for a list.
    fn lock_path(&self, list: &ListName) -> PathBuf {
        self.lists_dir().join(format!("{}.lock", list.file_stem()))
    }

    /// Read a list document. A list that was never written is empty.
    ///
    /// A document stored under this list's path for a different title is
    /// rejected rather than shared.
    pub fn read(&self, list: &ListName) -> Result<ListDocument> {
        let path = self.list_path(list);

        if !path.exists() {
            return Ok(ListDocument::empty(list));
        }

        let content = fs::read_to_string(&path)?;
        let doc: ListDocument = serde_json::from_str(&content).map_err(map_json)?;

        if doc.title != list.as_str() {
            return Err(TransportError::Decode {
                message: format!(
                    "{} holds list '{}', not '{}'",
                    path.display(),
                    doc.title,
                    list
                ),
            }
            .into());
        }

        Ok(doc)
    }

    /// Apply `change` to a list document under the list's write lock.
    ///
    /// The document is only written back if `change` succeeds.
    fn modify<T>(
        &self,
        list: &ListName,
        change: impl FnOnce(&mut ListDocument) -> Result<T>,
    ) -> Result<T> {
        fs::create_dir_all(self.lists_dir())?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path(list))?;

        lock_file.lock_exclusive()?;

        let result = self.read(list).and_then(|mut doc| {
            let value = change(&mut doc)?;
            doc.updated_at = Some(Utc::now().to_rfc3339());
            self.write(list, &doc)?;
            Ok(value)
        });

        lock_file.unlock()?;

        result
    }

    fn write(&self, list: &ListName, doc: &ListDocument) -> Result<()> {
        let path = self.list_path(list);
        let content = serde_json::to_string_pretty(doc).map_err(map_json)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    // ========================================================================
    // Item Operations
    // ========================================================================

    pub fn list_items(&self, list: &ListName) -> Result<Vec<Record>> {
        Ok(self.read(list)?.items)
    }

    #[instrument(skip(self, values), fields(list = %list))]
    pub fn create_item(&self, list: &ListName, values: &RecordFields) -> Result<Record> {
        let record = self.modify(list, |doc| {
            let record = Record::new(doc.next_id, values.clone());
            doc.next_id = doc.next_id.next();
            doc.items.push(record.clone());
            Ok(record)
        })?;

        debug!(id = %record.id, "Created item");

        Ok(record)
    }

    #[instrument(skip(self, values), fields(list = %list))]
    pub fn update_item(&self, list: &ListName, id: RecordId, values: &RecordFields) -> Result<()> {
        self.modify(list, |doc| {
            let pos = doc.position(id)?;
            doc.items[pos].apply(values);
            Ok(())
        })?;

        debug!(%id, "Updated item");

        Ok(())
    }

    #[instrument(skip(self), fields(list = %list))]
    pub fn delete_item(&self, list: &ListName, id: RecordId) -> Result<()> {
        self.modify(list, |doc| {
            let pos = doc.position(id)?;
            doc.items.remove(pos);
            Ok(())
        })?;

        debug!(%id, "Deleted item");

        Ok(())
    }
}
