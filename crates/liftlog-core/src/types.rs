use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LiftlogError, Result};

// =============================================================================
// Weight units
// =============================================================================

/// Unit a weight was entered in.
///
/// Stored verbatim with each entry and never converted afterwards. Volume
/// aggregation is unit-blind, so a log should stick to one unit throughout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kg" => Some(Self::Kg),
            "lbs" => Some(Self::Lbs),
            _ => None,
        }
    }
}

// =============================================================================
// Date handling
// =============================================================================

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date as it appears in stored rows.
///
/// Entries are written as plain `YYYY-MM-DD`, but rows produced by other
/// tools sometimes carry a time-of-day suffix (space- or `T`-separated,
/// optionally with fractional seconds). The suffix is accepted and discarded.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Serde codec for entry dates: plain ISO strings on write, tolerant of a
/// trailing time-of-day on read.
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &NaiveDate,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(super::DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_stored_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

// =============================================================================
// Entries
// =============================================================================

/// One logged workout: a single exercise performed for some sets and reps.
///
/// Entries are immutable once created; there is no update or delete anywhere
/// in the system. `total_volume` is derived at construction and persisted
/// next to the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub total_volume: f64,
}

impl WorkoutEntry {
    /// Build an entry from already-validated parts, computing the volume.
    pub fn new(
        date: NaiveDate,
        exercise: String,
        sets: u32,
        reps: u32,
        weight: f64,
        weight_unit: WeightUnit,
    ) -> Self {
        let total_volume = sets as f64 * reps as f64 * weight;
        Self {
            date,
            exercise,
            sets,
            reps,
            weight,
            weight_unit,
            total_volume,
        }
    }
}

/// Raw, possibly invalid input for a new entry.
///
/// Counts are signed so that out-of-range input reaches validation and gets
/// a proper message instead of failing at the parsing boundary.
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub date: NaiveDate,
    pub exercise: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub weight_unit: WeightUnit,
}

impl WorkoutDraft {
    /// Check every field and build the entry on success.
    ///
    /// All violations are collected before returning, so the caller can show
    /// the full list rather than the first problem found.
    pub fn validate(self) -> Result<WorkoutEntry> {
        let mut problems = Vec::new();

        let exercise = self.exercise.trim().to_string();
        if exercise.is_empty() {
            problems.push("Exercise name is required.".to_string());
        }
        if self.sets < 1 {
            problems.push("Sets must be greater than 0.".to_string());
        } else if self.sets > u32::MAX as i64 {
            problems.push(format!("Sets must be at most {}.", u32::MAX));
        }
        if self.reps < 1 {
            problems.push("Reps must be greater than 0.".to_string());
        } else if self.reps > u32::MAX as i64 {
            problems.push(format!("Reps must be at most {}.", u32::MAX));
        }
        if !self.weight.is_finite() {
            problems.push("Weight must be a finite number.".to_string());
        } else if self.weight < 0.0 {
            problems.push("Weight cannot be negative.".to_string());
        }

        if !problems.is_empty() {
            debug!("Rejected workout input: {}", problems.join("; "));
            return Err(LiftlogError::Validation(problems));
        }

        Ok(WorkoutEntry::new(
            self.date,
            exercise,
            self.sets as u32,
            self.reps as u32,
            self.weight,
            self.weight_unit,
        ))
    }
}

// =============================================================================
// Tests
// =============================================================================
