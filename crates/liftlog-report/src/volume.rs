//! Weekly training-volume aggregation.

use std::collections::BTreeMap;

use liftlog_core::WorkoutEntry;
use serde::Serialize;

use crate::week::week_of;

/// One row of a weekly volume report.
///
/// `exercise` is present only in per-exercise reports and is omitted from
/// JSON output otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeRow {
    pub week_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    pub total_volume: f64,
}

/// Total volume per calendar week, ascending by week.
pub fn aggregate_total(entries: &[WorkoutEntry]) -> Vec<VolumeRow> {
    let mut weeks: BTreeMap<String, f64> = BTreeMap::new();
    for entry in entries {
        *weeks.entry(week_of(entry.date).label).or_insert(0.0) += entry.total_volume;
    }
    weeks
        .into_iter()
        .map(|(week_label, total_volume)| VolumeRow {
            week_label,
            exercise: None,
            total_volume,
        })
        .collect()
}

/// Volume per (week, exercise) pair, ascending by week then exercise name.
///
/// Exercise grouping is exact: "Bench Press" and "bench press" are distinct
/// rows.
pub fn aggregate_by_exercise(entries: &[WorkoutEntry]) -> Vec<VolumeRow> {
    let mut groups: BTreeMap<(String, String), f64> = BTreeMap::new();
    for entry in entries {
        *groups
            .entry((week_of(entry.date).label, entry.exercise.clone()))
            .or_insert(0.0) += entry.total_volume;
    }
    groups
        .into_iter()
        .map(|((week_label, exercise), total_volume)| VolumeRow {
            week_label,
            exercise: Some(exercise),
            total_volume,
        })
        .collect()
}
