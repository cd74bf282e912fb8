//! Subcommand handlers.
//!
//! Each handler takes the store as a trait object and returns the text to
//! print, so the same code paths serve tests (via `MemoryStore`) and the
//! real backends.

use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use liftlog_core::{LiftlogError, Result, WeightUnit, WorkoutDraft, WorkoutEntry};
use liftlog_report::{aggregate_by_exercise, aggregate_total, VolumeRow};
use liftlog_storage::{write_csv, WorkoutStore};

/// Validate and record one workout entry.
pub fn add(
    store: &dyn WorkoutStore,
    date: NaiveDate,
    exercise: String,
    sets: i64,
    reps: i64,
    weight: f64,
    unit: &str,
) -> Result<String> {
    let weight_unit = WeightUnit::parse(unit).ok_or_else(|| {
        LiftlogError::Validation(vec![format!(
            "Weight unit must be kg or lbs, got '{}'.",
            unit
        )])
    })?;
    let draft = WorkoutDraft {
        date,
        exercise,
        sets,
        reps,
        weight,
        weight_unit,
    };
    let entry = draft.validate()?;
    store.append(&entry)?;
    info!("Recorded {} for {}", entry.exercise, entry.date);
    Ok(format!(
        "Added: {} {}x{} @ {} {} (volume: {:.1})",
        entry.exercise,
        entry.sets,
        entry.reps,
        entry.weight,
        entry.weight_unit.as_str(),
        entry.total_volume
    ))
}

/// Render the log, newest entries first.
pub fn list(store: &dyn WorkoutStore, json: bool) -> Result<String> {
    let entries = load_newest_first(store)?;
    debug!("Listing {} entries", entries.len());
    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }
    Ok(render_entries(&entries))
}

/// Render weekly training volume, optionally broken down by exercise.
pub fn weekly(store: &dyn WorkoutStore, per_exercise: bool, json: bool) -> Result<String> {
    let entries = store.load()?;
    let rows = if per_exercise {
        aggregate_by_exercise(&entries)
    } else {
        aggregate_total(&entries)
    };
    debug!(
        "Aggregated {} entries into {} weekly rows",
        entries.len(),
        rows.len()
    );
    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    Ok(render_volume(&rows))
}

/// Export the full log as CSV to a file, or return it for stdout.
pub fn export(store: &dyn WorkoutStore, output: Option<&Path>) -> Result<String> {
    let entries = load_newest_first(store)?;
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LiftlogError::StorageWrite(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_csv(&entries, file)?;
            info!("Exported {} entries to {}", entries.len(), path.display());
            Ok(format!(
                "Exported {} entries to {}",
                entries.len(),
                path.display()
            ))
        }
        None => {
            let mut buf = Vec::new();
            write_csv(&entries, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// Insert a handful of example entries dated today.
pub fn seed(store: &dyn WorkoutStore) -> Result<String> {
    let today = Local::now().date_naive();
    let samples = [
        ("Bench Press", 3, 8, 60.0),
        ("Squat", 5, 5, 80.0),
        ("Deadlift", 3, 5, 100.0),
    ];
    for (exercise, sets, reps, weight) in samples {
        let entry = WorkoutDraft {
            date: today,
            exercise: exercise.to_string(),
            sets,
            reps,
            weight,
            weight_unit: WeightUnit::Kg,
        }
        .validate()?;
        store.append(&entry)?;
    }
    info!("Seeded {} example entries", samples.len());
    Ok(format!(
        "Seeded {} example entries dated {}",
        samples.len(),
        today
    ))
}

/// Load the log sorted by date descending. The sort is stable, so entries
/// sharing a date keep their log order.
fn load_newest_first(store: &dyn WorkoutStore) -> Result<Vec<WorkoutEntry>> {
    let mut entries = store.load()?;
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(entries)
}

fn render_entries(entries: &[WorkoutEntry]) -> String {
    if entries.is_empty() {
        return "No workouts logged yet.".to_string();
    }
    let mut out = format!(
        "{:<12} {:<20} {:>4} {:>4} {:>8} {:>5} {:>10}\n",
        "date", "exercise", "sets", "reps", "weight", "unit", "volume"
    );
    for entry in entries {
        out.push_str(&format!(
            "{:<12} {:<20} {:>4} {:>4} {:>8.1} {:>5} {:>10.1}\n",
            entry.date.to_string(),
            entry.exercise,
            entry.sets,
            entry.reps,
            entry.weight,
            entry.weight_unit.as_str(),
            entry.total_volume
        ));
    }
    out
}

fn render_volume(rows: &[VolumeRow]) -> String {
    if rows.is_empty() {
        return "No workouts logged yet.".to_string();
    }
    let mut out = String::new();
    if rows.iter().any(|row| row.exercise.is_some()) {
        out.push_str(&format!(
            "{:<12} {:<20} {:>12}\n",
            "week", "exercise", "volume"
        ));
        for row in rows {
            out.push_str(&format!(
                "{:<12} {:<20} {:>12.1}\n",
                row.week_label,
                row.exercise.as_deref().unwrap_or(""),
                row.total_volume
            ));
        }
    } else {
        out.push_str(&format!("{:<12} {:>12}\n", "week", "volume"));
        for row in rows {
            out.push_str(&format!(
                "{:<12} {:>12.1}\n",
                row.week_label, row.total_volume
            ));
        }
    }
    out
}
