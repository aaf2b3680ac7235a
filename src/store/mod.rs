//! Record stores for finished games.
//!
//! The session hands every finished game to a [`RecordStore`]; these stores
//! stamp it with an id and creation time and keep it for later listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, RecordId};

/// A finished game as kept by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub data: GameSnapshot,
}

pub use crate::core::RecordStore;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
