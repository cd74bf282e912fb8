//! Liftlog report crate - weekly training-volume reporting.
//!
//! Provides:
//! - Monday-anchored calendar-week bucketing
//! - Total volume per week
//! - Volume per week and exercise

pub mod volume;
pub mod week;

pub use volume::{aggregate_by_exercise, aggregate_total, VolumeRow};
pub use week::{week_of, WeekBucket};
