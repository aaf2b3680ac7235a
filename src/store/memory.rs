use core::convert::Infallible;

use chrono::Utc;
use log::debug;

use super::StoredRecord;
use crate::core::{GameSnapshot, RecordId, RecordStore};

/// Vec-backed store; ids start at 1 and never repeat, even after deletes.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Vec<StoredRecord>,
    next_id: RecordId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from previously saved records and the saved id
    /// counter. The counter never goes below one past the largest id.
    pub fn from_records(records: Vec<StoredRecord>, next_id: RecordId) -> Self {
        let floor = records.iter().map(|r| r.id + 1).max().unwrap_or(1);
        Self {
            records,
            next_id: next_id.max(floor),
        }
    }

    /// Id the next added record will get.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&StoredRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns `true` if a record was removed.
    pub fn delete(&mut self, id: RecordId) -> bool {
        self.take(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove a record, returning it with its position for [`Self::restore`].
    pub(crate) fn take(&mut self, id: RecordId) -> Option<(usize, StoredRecord)> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some((index, self.records.remove(index)))
    }

    pub(crate) fn restore(&mut self, index: usize, record: StoredRecord) {
        let index = index.min(self.records.len());
        self.records.insert(index, record);
    }

    pub(crate) fn push(&mut self, snapshot: GameSnapshot) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(StoredRecord {
            id,
            created_at: Utc::now(),
            data: snapshot,
        });
        debug!("stored record {}", id);
        id
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    type Error = Infallible;

    fn add(&mut self, snapshot: GameSnapshot) -> Result<RecordId, Self::Error> {
        Ok(self.push(snapshot))
    }
}
