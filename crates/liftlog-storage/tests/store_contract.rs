//! Cross-backend integration tests for the storage contract.
//!
//! Both persistent backends must agree on observable behavior: a missing
//! file reads as an empty log, corrupt data fails as a read error, and a
//! log written through one backend loads back as the same entries the
//! other backend would produce.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use liftlog_core::{BackendKind, LiftlogError, WeightUnit, WorkoutEntry};
use liftlog_storage::{append, load_all, open_store, write_csv};

// =============================================================================
// Helpers
// =============================================================================

const BACKENDS: [BackendKind; 2] = [BackendKind::Csv, BackendKind::Sqlite];

fn make_entry(date: &str, exercise: &str, weight: f64) -> WorkoutEntry {
    WorkoutEntry::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        exercise.to_string(),
        3,
        8,
        weight,
        WeightUnit::Kg,
    )
}

/// Entries spanning two weeks and two exercises, in log order.
fn sample_entries() -> Vec<WorkoutEntry> {
    vec![
        make_entry("2024-05-06", "Bench Press", 60.0),
        make_entry("2024-05-08", "Squat", 80.0),
        make_entry("2024-05-13", "Bench Press", 62.5),
        make_entry("2024-05-15", "Clean, Jerk", 50.0),
    ]
}

fn backend_path(dir: &TempDir, kind: BackendKind) -> PathBuf {
    match kind {
        BackendKind::Csv => dir.path().join("log.csv"),
        BackendKind::Sqlite => dir.path().join("log.db"),
    }
}

// =============================================================================
// Empty and missing logs
// =============================================================================

#[test]
fn test_missing_file_loads_empty_on_every_backend() {
    for kind in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let path = backend_path(&dir, kind);

        let entries = load_all(kind, &path).unwrap();
        assert!(
            entries.is_empty(),
            "Expected empty log for missing {} file",
            kind.as_str()
        );
        assert!(
            !path.exists(),
            "Loading must not create the {} file",
            kind.as_str()
        );
    }
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_append_then_load_round_trips_on_every_backend() {
    for kind in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let path = backend_path(&dir, kind);

        for entry in sample_entries() {
            append(kind, &path, &entry).unwrap();
        }

        let loaded = load_all(kind, &path).unwrap();
        assert_eq!(
            loaded,
            sample_entries(),
            "Round trip mismatch for {} backend",
            kind.as_str()
        );
    }
}

#[test]
fn test_backends_agree_on_loaded_entries() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = backend_path(&dir, BackendKind::Csv);
    let sqlite_path = backend_path(&dir, BackendKind::Sqlite);

    for entry in sample_entries() {
        append(BackendKind::Csv, &csv_path, &entry).unwrap();
        append(BackendKind::Sqlite, &sqlite_path, &entry).unwrap();
    }

    let from_csv = load_all(BackendKind::Csv, &csv_path).unwrap();
    let from_sqlite = load_all(BackendKind::Sqlite, &sqlite_path).unwrap();
    assert_eq!(from_csv, from_sqlite);
}

#[test]
fn test_open_store_returns_usable_trait_object() {
    for kind in BACKENDS {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(kind, &backend_path(&dir, kind));

        store
            .append(&make_entry("2024-05-06", "Deadlift", 100.0))
            .unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1, "One entry expected for {}", kind.as_str());
        assert_eq!(loaded[0].exercise, "Deadlift");
    }
}

// =============================================================================
// Corrupt data
// =============================================================================

#[test]
fn test_corrupt_csv_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = backend_path(&dir, BackendKind::Csv);
    fs::write(
        &path,
        "date,exercise,sets,reps,weight,weight_unit,total_volume\n\
         2024-05-06,Bench Press,not-a-number,8,60.0,kg,1440.0\n",
    )
    .unwrap();

    let err = load_all(BackendKind::Csv, &path).unwrap_err();
    assert!(matches!(err, LiftlogError::StorageRead(_)));
}

#[test]
fn test_corrupt_sqlite_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = backend_path(&dir, BackendKind::Sqlite);
    fs::write(&path, "definitely not a sqlite database").unwrap();

    let err = load_all(BackendKind::Sqlite, &path).unwrap_err();
    assert!(matches!(err, LiftlogError::StorageRead(_)));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_is_identical_regardless_of_backend() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = backend_path(&dir, BackendKind::Csv);
    let sqlite_path = backend_path(&dir, BackendKind::Sqlite);

    for entry in sample_entries() {
        append(BackendKind::Csv, &csv_path, &entry).unwrap();
        append(BackendKind::Sqlite, &sqlite_path, &entry).unwrap();
    }

    let mut from_csv = Vec::new();
    write_csv(&load_all(BackendKind::Csv, &csv_path).unwrap(), &mut from_csv).unwrap();
    let mut from_sqlite = Vec::new();
    write_csv(
        &load_all(BackendKind::Sqlite, &sqlite_path).unwrap(),
        &mut from_sqlite,
    )
    .unwrap();

    assert_eq!(from_csv, from_sqlite);
    assert!(String::from_utf8(from_csv)
        .unwrap()
        .starts_with("date,exercise,sets,reps,weight,weight_unit,total_volume\n"));
}
