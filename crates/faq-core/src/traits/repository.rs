//! Record repository trait.

use async_trait::async_trait;

use crate::record::{Record, RecordFields};
use crate::types::{ListName, RecordId};
use crate::Result;

/// Access to one list of records.
///
/// Every operation may fail; implementations report failures as
/// [`Error::Transport`](crate::Error::Transport) or
/// [`Error::Protocol`](crate::Error::Protocol).
#[async_trait]
pub trait Repository: Send + Sync {
    /// Returns the name of the list this repository operates on.
    fn list_name(&self) -> &ListName;

    /// Fetch every record in service order.
    async fn list(&self) -> Result<Vec<Record>>;

    /// Create a record and return it with its assigned id.
    async fn create(&self, fields: &RecordFields) -> Result<Record>;

    /// Replace the fields of an existing record.
    async fn update(&self, id: RecordId, fields: &RecordFields) -> Result<()>;

    /// Delete a record.
    async fn remove(&self, id: RecordId) -> Result<()>;
}

#[async_trait]
impl<R> Repository for std::sync::Arc<R>
where
    R: Repository + ?Sized,
{
    fn list_name(&self) -> &ListName {
        (**self).list_name()
    }

    async fn list(&self) -> Result<Vec<Record>> {
        (**self).list().await
    }

    async fn create(&self, fields: &RecordFields) -> Result<Record> {
        (**self).create(fields).await
    }

    async fn update(&self, id: RecordId, fields: &RecordFields) -> Result<()> {
        (**self).update(id, fields).await
    }

    async fn remove(&self, id: RecordId) -> Result<()> {
        (**self).remove(id).await
    }
}
