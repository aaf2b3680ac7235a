use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{MemoryStore, StoredRecord};
use crate::core::{GameSnapshot, RecordId, RecordStore};

/// On-disk layout: the id counter travels with the records so deleted ids
/// stay retired across reopens.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordFile<'a> {
    next_id: RecordId,
    records: Cow<'a, [StoredRecord]>,
}

/// Store persisted as a JSON document, rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file: RecordFile<'static> = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("corrupt record file {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => RecordFile {
                next_id: 1,
                records: Cow::Owned(Vec::new()),
            },
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()));
            }
        };
        info!(
            "loaded {} game records from {}",
            file.records.len(),
            path.display()
        );
        Ok(Self {
            path,
            inner: MemoryStore::from_records(file.records.into_owned(), file.next_id),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[StoredRecord] {
        self.inner.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&StoredRecord> {
        self.inner.get(id)
    }

    /// Remove a record. If the file cannot be rewritten the record is kept.
    pub fn delete(&mut self, id: RecordId) -> anyhow::Result<bool> {
        let Some((index, record)) = self.inner.take(id) else {
            return Ok(false);
        };
        if let Err(e) = self.flush() {
            warn!("keeping record {} after failed write", id);
            self.inner.restore(index, record);
            return Err(e);
        }
        Ok(true)
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
        }
        let file = RecordFile {
            next_id: self.inner.next_id(),
            records: Cow::Borrowed(self.inner.records()),
        };
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text)
            .with_context(|| format!("cannot write {}", self.path.display()))
    }
}

impl RecordStore for JsonFileStore {
    type Error = anyhow::Error;

    fn add(&mut self, snapshot: GameSnapshot) -> Result<RecordId, Self::Error> {
        let id = self.inner.push(snapshot);
        if let Err(e) = self.flush() {
            warn!("dropping record {} after failed write", id);
            self.inner.delete(id);
            return Err(e);
        }
        Ok(id)
    }
}
