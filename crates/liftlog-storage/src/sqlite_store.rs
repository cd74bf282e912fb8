//! SQLite backend.
//!
//! Connections are opened per operation and closed when they drop. Reads
//! open the database read-only and treat a missing file or missing
//! `workouts` table as an empty log; writes ensure the schema exists
//! before inserting.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use tracing::debug;

use liftlog_core::types::parse_stored_date;
use liftlog_core::{LiftlogError, Result, WeightUnit, WorkoutEntry};

use crate::store::WorkoutStore;

const CREATE_WORKOUTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS workouts (
        date TEXT,
        exercise TEXT,
        sets INTEGER,
        reps INTEGER,
        weight REAL,
        weight_unit TEXT,
        total_volume REAL
    )";

/// SQLite-backed workout store.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl WorkoutStore for SqliteStore {
    fn load(&self) -> Result<Vec<WorkoutEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| {
                LiftlogError::StorageRead(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        if !table_exists(&conn)? {
            return Ok(Vec::new());
        }

        let mut stmt = conn
            .prepare(
                "SELECT date, exercise, sets, reps, weight, weight_unit, total_volume
                 FROM workouts ORDER BY rowid",
            )
            .map_err(|e| {
                LiftlogError::StorageRead(format!("Failed to query workouts: {}", e))
            })?;
        let rows = stmt
            .query_map([], |row| Ok(row_to_entry(row)))
            .map_err(|e| LiftlogError::StorageRead(format!("Failed to read workouts: {}", e)))?;

        let mut entries = Vec::new();
        for row in rows {
            let entry = row
                .map_err(|e| LiftlogError::StorageRead(format!("Failed to read row: {}", e)))??;
            entries.push(entry);
        }
        debug!(
            "Loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn append(&self, entry: &WorkoutEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LiftlogError::StorageWrite(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let conn = Connection::open(&self.path).map_err(|e| {
            LiftlogError::StorageWrite(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        conn.execute(CREATE_WORKOUTS_TABLE, []).map_err(|e| {
            LiftlogError::StorageWrite(format!("Failed to create workouts table: {}", e))
        })?;
        conn.execute(
            "INSERT INTO workouts (date, exercise, sets, reps, weight, weight_unit, total_volume)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                entry.date.to_string(),
                entry.exercise,
                entry.sets,
                entry.reps,
                entry.weight,
                entry.weight_unit.as_str(),
                entry.total_volume,
            ],
        )
        .map_err(|e| LiftlogError::StorageWrite(format!("Failed to insert workout: {}", e)))?;
        debug!("Appended entry to {}", self.path.display());
        Ok(())
    }
}

fn table_exists(conn: &Connection) -> Result<bool> {
    let name = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'workouts'",
            [],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| LiftlogError::StorageRead(format!("Failed to inspect schema: {}", e)))?;
    Ok(name.is_some())
}

/// Convert a database row into a [`WorkoutEntry`], keeping the stored
/// total_volume rather than recomputing it.
fn row_to_entry(row: &rusqlite::Row) -> Result<WorkoutEntry> {
    let raw_date: String = row
        .get(0)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid date column: {}", e)))?;
    let date = parse_stored_date(&raw_date)
        .ok_or_else(|| LiftlogError::StorageRead(format!("Invalid stored date '{}'", raw_date)))?;

    let exercise: String = row
        .get(1)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid exercise column: {}", e)))?;
    let sets: u32 = row
        .get(2)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid sets column: {}", e)))?;
    let reps: u32 = row
        .get(3)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid reps column: {}", e)))?;
    let weight: f64 = row
        .get(4)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid weight column: {}", e)))?;

    let raw_unit: String = row
        .get(5)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid weight_unit column: {}", e)))?;
    let weight_unit = WeightUnit::parse(&raw_unit).ok_or_else(|| {
        LiftlogError::StorageRead(format!("Unknown weight unit '{}'", raw_unit))
    })?;

    let total_volume: f64 = row
        .get(6)
        .map_err(|e| LiftlogError::StorageRead(format!("Invalid total_volume column: {}", e)))?;

    Ok(WorkoutEntry {
        date,
        exercise,
        sets,
        reps,
        weight,
        weight_unit,
        total_volume,
    })
}
