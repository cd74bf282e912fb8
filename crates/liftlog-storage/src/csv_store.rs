//! CSV flat-file backend.
//!
//! One UTF-8 file: a header row, then one row per entry in schema column
//! order. Appending rewrites the whole file through a temp-file swap, so a
//! crash mid-write leaves either the old log or the new one on disk, never
//! a torn file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use liftlog_core::{LiftlogError, Result, WorkoutEntry};

use crate::export::write_csv;
use crate::store::WorkoutStore;

/// CSV-backed workout store.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn read_entries(&self) -> Result<Vec<WorkoutEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            LiftlogError::StorageRead(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        let mut entries = Vec::new();
        for (index, row) in reader.deserialize::<WorkoutEntry>().enumerate() {
            let entry = row.map_err(|e| {
                LiftlogError::StorageRead(format!(
                    "Malformed row {} in {}: {}",
                    index + 2,
                    self.path.display(),
                    e
                ))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }
}

impl WorkoutStore for CsvStore {
    fn load(&self) -> Result<Vec<WorkoutEntry>> {
        let entries = self.read_entries()?;
        debug!(
            "Loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn append(&self, entry: &WorkoutEntry) -> Result<()> {
        // The pre-read of the existing log is part of the append; a failure
        // here means the entry was not saved.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(LiftlogError::StorageRead(msg)) => return Err(LiftlogError::StorageWrite(msg)),
            Err(e) => return Err(e),
        };
        entries.push(entry.clone());

        let mut buf = Vec::new();
        write_csv(&entries, &mut buf)?;
        replace_file(&self.path, &buf).map_err(|e| {
            LiftlogError::StorageWrite(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(
            "Appended entry to {} ({} rows)",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }
}

/// Write bytes to a sibling `.tmp` file, sync, then rename over the target.
fn replace_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
