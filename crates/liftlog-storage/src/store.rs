//! Storage contract and backend selection.

use std::path::Path;
use std::sync::Mutex;

use liftlog_core::{BackendKind, LiftlogError, Result, WorkoutEntry};

use crate::csv_store::CsvStore;
use crate::sqlite_store::SqliteStore;

/// Persistence contract shared by every backend.
///
/// Implementations open their resources per call and release them before
/// returning; a store value is just a backend plus a location.
pub trait WorkoutStore: Send + Sync {
    /// Load the full log in storage order.
    ///
    /// A location that does not exist yet is an empty log, not an error.
    fn load(&self) -> Result<Vec<WorkoutEntry>>;

    /// Persist one entry at the end of the log.
    ///
    /// On failure the previously stored data is left intact.
    fn append(&self, entry: &WorkoutEntry) -> Result<()>;
}

/// Open the store for a backend kind and location.
pub fn open_store(kind: BackendKind, path: &Path) -> Box<dyn WorkoutStore> {
    match kind {
        BackendKind::Csv => Box::new(CsvStore::new(path)),
        BackendKind::Sqlite => Box::new(SqliteStore::new(path)),
    }
}

/// Load the full log from a backend and location.
pub fn load_all(kind: BackendKind, path: &Path) -> Result<Vec<WorkoutEntry>> {
    open_store(kind, path).load()
}

/// Append one entry to a backend and location.
pub fn append(kind: BackendKind, path: &Path, entry: &WorkoutEntry) -> Result<()> {
    open_store(kind, path).append(entry)
}

/// In-memory store for testing consumers of the contract.
///
/// Behaves like a file backend that starts empty and keeps entries in
/// append order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<WorkoutEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutStore for MemoryStore {
    fn load(&self) -> Result<Vec<WorkoutEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| LiftlogError::StorageRead(format!("Store lock poisoned: {}", e)))?;
        Ok(entries.clone())
    }

    fn append(&self, entry: &WorkoutEntry) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| LiftlogError::StorageWrite(format!("Store lock poisoned: {}", e)))?;
        entries.push(entry.clone());
        Ok(())
    }
}
