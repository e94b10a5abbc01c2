//! File-backed repository implementation.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, instrument};

use faq_core::record::{Record, RecordFields};
use faq_core::traits::Repository;
use faq_core::types::{ListName, ListUrl, RecordId};
use faq_core::error::InvalidInputError;
use faq_core::{Error, Result};

use crate::store::FileStore;

/// A list kept on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileRepository {
    store: FileStore,
    list: ListName,
}

impl FileRepository {
    /// Open `list` in the store rooted at `root`.
    pub fn new(root: impl AsRef<Path>, list: ListName) -> Self {
        Self {
            store: FileStore::new(root),
            list,
        }
    }

    /// Open `list` in the store a `file://` URL points at.
    pub fn from_url(url: &ListUrl, list: ListName) -> Result<Self> {
        let root = url.to_file_path().ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::ListUrl {
                value: url.to_string(),
                reason: "not a file:// URL".to_string(),
            })
        })?;
        Ok(Self::new(root, list))
    }

    /// Access the underlying file store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

#[async_trait]
impl Repository for FileRepository {
    fn list_name(&self) -> &ListName {
        &self.list
    }

    #[instrument(skip(self), fields(list = %self.list))]
    async fn list(&self) -> Result<Vec<Record>> {
        debug!("Listing items");
        self.store.list_items(&self.list)
    }

    #[instrument(skip(self, values), fields(list = %self.list))]
    async fn create(&self, values: &RecordFields) -> Result<Record> {
        debug!("Creating item");
        self.store.create_item(&self.list, values)
    }

    #[instrument(skip(self, values), fields(list = %self.list))]
    async fn update(&self, id: RecordId, values: &RecordFields) -> Result<()> {
        debug!("Updating item");
        self.store.update_item(&self.list, id, values)
    }

    #[instrument(skip(self), fields(list = %self.list))]
    async fn remove(&self, id: RecordId) -> Result<()> {
        debug!("Deleting item");
        self.store.delete_item(&self.list, id)
    }
}
