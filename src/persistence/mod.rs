//! Score record persistence
//!
//! The persisted record is three scalars (coins, score, level) stored as
//! JSON. Load failures fall back to defaults; save failures are logged and
//! dropped. Neither is ever fatal to a running session.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::sim::SaveRecord;

/// Key-value persistence boundary for the score record
pub trait ScoreStore {
    /// Load the saved record, or defaults if none exists or it is corrupt
    fn load(&self) -> SaveRecord;

    /// Persist the record. Fire-and-forget: failures are swallowed.
    fn save(&self, record: &SaveRecord);
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> SaveRecord {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(record) => {
                    log::info!("loaded save from {}", self.path.display());
                    record
                }
                Err(err) => {
                    log::warn!("corrupt save at {}: {err}", self.path.display());
                    SaveRecord::default()
                }
            },
            Err(_) => {
                log::info!("no save at {}, using defaults", self.path.display());
                SaveRecord::default()
            }
        }
    }

    fn save(&self, record: &SaveRecord) {
        match serde_json::to_string(record) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("failed to write save to {}: {err}", self.path.display());
                } else {
                    log::info!("saved to {}", self.path.display());
                }
            }
            Err(err) => log::warn!("failed to encode save: {err}"),
        }
    }
}

/// In-memory store, shared across clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<SaveRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last record saved, if any
    pub fn saved(&self) -> Option<SaveRecord> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> SaveRecord {
        self.saved().unwrap_or_default()
    }

    fn save(&self, record: &SaveRecord) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(*record);
    }
}
