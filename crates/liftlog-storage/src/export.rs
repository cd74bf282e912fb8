//! Backend-independent CSV export.

use std::io::Write;

use liftlog_core::{LiftlogError, Result, WorkoutEntry};

/// Column order of the tabular format. The CSV backend and every export
/// share this layout.
const CSV_HEADER: [&str; 7] = [
    "date",
    "exercise",
    "sets",
    "reps",
    "weight",
    "weight_unit",
    "total_volume",
];

/// Write entries as CSV to any sink, in the order given.
///
/// The header row is written even for an empty slice, so the output is
/// always a well-formed table.
pub fn write_csv<W: Write>(entries: &[WorkoutEntry], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)
        .map_err(|e| LiftlogError::StorageWrite(format!("Failed to write header: {}", e)))?;
    for entry in entries {
        wtr.serialize(entry)
            .map_err(|e| LiftlogError::StorageWrite(format!("Failed to write entry: {}", e)))?;
    }
    wtr.flush()
        .map_err(|e| LiftlogError::StorageWrite(format!("Failed to flush output: {}", e)))?;
    Ok(())
}
