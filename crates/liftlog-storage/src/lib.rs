//! Storage backends for workout logs.
//!
//! Every backend persists the same seven-column record (date, exercise,
//! sets, reps, weight, weight unit, total volume) behind the
//! [`WorkoutStore`] trait:
//!
//! - [`CsvStore`]: a flat CSV file rewritten atomically on append
//! - [`SqliteStore`]: a SQLite database with per-operation connections
//! - [`MemoryStore`]: an in-memory store for tests
//!
//! [`open_store`] picks the backend from configuration, and
//! [`write_csv`] renders any entry list as CSV regardless of where it
//! was loaded from.

pub mod csv_store;
pub mod export;
pub mod sqlite_store;
pub mod store;

pub use csv_store::CsvStore;
pub use export::write_csv;
pub use sqlite_store::SqliteStore;
pub use store::{append, load_all, open_store, MemoryStore, WorkoutStore};
