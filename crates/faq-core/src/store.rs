//! In-memory copy of the list.

use tracing::{debug, instrument, warn};

use crate::Result;
use crate::record::Record;
use crate::traits::Repository;
use crate::types::RecordId;

/// The authoritative in-memory copy of every record, plus a loading flag.
///
/// Records only change through [`reload`](Self::reload), so the store always
/// mirrors what the repository last returned.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    loading: bool,
}

/// Clears the loading flag when dropped, so a reload that is abandoned
/// mid-flight never leaves the store stuck in the loading state.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the records with a fresh fetch from the repository.
    ///
    /// On failure the previous records are kept and the error is returned.
    /// The loading flag is cleared in every case.
    #[instrument(skip(self, repo), fields(list = %repo.list_name()))]
    pub async fn reload<R>(&mut self, repo: &R) -> Result<usize>
    where
        R: Repository + ?Sized,
    {
        let fetched = {
            let _loading = LoadingGuard::start(&mut self.loading);
            repo.list().await
        };

        match fetched {
            Ok(records) => {
                debug!(count = records.len(), "Loaded records");
                self.records = records;
                Ok(self.records.len())
            }
            Err(e) => {
                warn!(error = %e, kept = self.records.len(), "Reload failed, keeping previous records");
                Err(e)
            }
        }
    }

    /// All records, in service order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::time::timeout;

    use crate::memory::{MemoryRepository, Operation};
    use crate::record::RecordFields;
    use crate::types::ListName;

    #[tokio::test]
    async fn reload_replaces_records() {
        let repo = MemoryRepository::with_records([
            RecordFields::new("Q1", "A1", "A"),
            RecordFields::new("Q2", "A2", "B"),
        ]);
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        let count = store.reload(&repo).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.records()[1].title, "Q2");
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_records() {
        let repo = MemoryRepository::with_records([RecordFields::new("Q1", "A1", "A")]);
        let mut store = RecordStore::new();
        store.reload(&repo).await.unwrap();

        repo.create(&RecordFields::new("Q2", "A2", "B")).await.unwrap();
        repo.fail_next(Operation::List);
        assert!(store.reload(&repo).await.is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].title, "Q1");
        assert!(!store.is_loading());
    }

    /// A repository whose listing never answers.
    struct Stalled(ListName);

    #[async_trait]
    impl Repository for Stalled {
        fn list_name(&self) -> &ListName {
            &self.0
        }

        async fn list(&self) -> Result<Vec<Record>> {
            std::future::pending().await
        }

        async fn create(&self, _values: &RecordFields) -> Result<Record> {
            std::future::pending().await
        }

        async fn update(&self, _id: RecordId, _values: &RecordFields) -> Result<()> {
            std::future::pending().await
        }

        async fn remove(&self, _id: RecordId) -> Result<()> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_reload_clears_loading() {
        let seeded = MemoryRepository::with_records([RecordFields::new("Q1", "A1", "A")]);
        let mut store = RecordStore::new();
        store.reload(&seeded).await.unwrap();

        let stalled = Stalled(ListName::default());
        let outcome = timeout(Duration::from_millis(50), store.reload(&stalled)).await;

        assert!(outcome.is_err());
        assert!(!store.is_loading());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let repo = MemoryRepository::with_records([RecordFields::new("Q1", "A1", "A")]);
        let mut store = RecordStore::new();
        store.reload(&repo).await.unwrap();

        let id = store.records()[0].id;
        assert_eq!(store.get(id).map(|r| r.title.as_str()), Some("Q1"));
        assert!(store.get(RecordId::new(99).unwrap()).is_none());
    }
}
