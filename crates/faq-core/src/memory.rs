//! In-memory repository.
//!
//! Useful as a test double: it assigns ids like a real list service, counts
//! calls, and can be told to fail the next call of a given kind.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ProtocolError, TransportError};
use crate::record::{Record, RecordFields};
use crate::traits::Repository;
use crate::types::{ListName, RecordId};
use crate::Result;

/// A repository operation, used for call counting and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Remove,
}

#[derive(Debug)]
struct MemoryState {
    records: Vec<Record>,
    next_id: RecordId,
    calls: HashMap<Operation, usize>,
    failures: Vec<Operation>,
}

/// A list held in memory.
#[derive(Debug)]
pub struct MemoryRepository {
    list: ListName,
    state: Mutex<MemoryState>,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new(ListName::default())
    }
}

impl MemoryRepository {
    /// Create an empty list.
    pub fn new(list: ListName) -> Self {
        Self {
            list,
            state: Mutex::new(MemoryState {
                records: Vec::new(),
                next_id: RecordId::FIRST,
                calls: HashMap::new(),
                failures: Vec::new(),
            }),
        }
    }

    /// Create the default list pre-filled with records, ids assigned from 1.
    pub fn with_records(fields: impl IntoIterator<Item = RecordFields>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state();
            for f in fields {
                let id = state.allocate();
                state.records.push(Record::new(id, f));
            }
        }
        repo
    }

    /// Make the next call of `op` fail with a transport error.
    pub fn fail_next(&self, op: Operation) {
        self.state().failures.push(op);
    }

    /// Number of calls made for `op`, including failed ones.
    pub fn calls(&self, op: Operation) -> usize {
        self.state().calls.get(&op).copied().unwrap_or(0)
    }

    /// Total number of calls across all operations.
    pub fn total_calls(&self) -> usize {
        self.state().calls.values().sum()
    }

    /// Snapshot of the stored records.
    pub fn snapshot(&self) -> Vec<Record> {
        self.state().records.clone()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryState {
    fn allocate(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn begin(&mut self, op: Operation) -> Result<()> {
        *self.calls.entry(op).or_default() += 1;
        if let Some(pos) = self.failures.iter().position(|f| *f == op) {
            self.failures.remove(pos);
            return Err(TransportError::Connection {
                message: format!("injected {:?} failure", op),
            }
            .into());
        }
        Ok(())
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ProtocolError::item_not_found(id).into())
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    fn list_name(&self) -> &ListName {
        &self.list
    }

    async fn list(&self) -> Result<Vec<Record>> {
        let mut state = self.state();
        state.begin(Operation::List)?;
        Ok(state.records.clone())
    }

    async fn create(&self, fields: &RecordFields) -> Result<Record> {
        let mut state = self.state();
        state.begin(Operation::Create)?;
        let record = Record::new(state.allocate(), fields.clone());
        state.records.push(record.clone());
        debug!(id = %record.id, "Created record in memory");
        Ok(record)
    }

    async fn update(&self, id: RecordId, fields: &RecordFields) -> Result<()> {
        let mut state = self.state();
        state.begin(Operation::Update)?;
        let pos = state.position(id)?;
        state.records[pos].apply(fields);
        Ok(())
    }

    async fn remove(&self, id: RecordId) -> Result<()> {
        let mut state = self.state();
        state.begin(Operation::Remove)?;
        let pos = state.position(id)?;
        state.records.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_never_reused() {
        let repo = MemoryRepository::default();
        let first = repo.create(&RecordFields::new("a", "", "")).await.unwrap();
        repo.remove(first.id).await.unwrap();
        let second = repo.create(&RecordFields::new("b", "", "")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let repo = MemoryRepository::default();
        repo.fail_next(Operation::List);
        assert!(repo.list().await.is_err());
        assert!(repo.list().await.is_ok());
        assert_eq!(repo.calls(Operation::List), 2);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let repo = MemoryRepository::default();
        let err = repo
            .update(RecordId::new(5).unwrap(), &RecordFields::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
