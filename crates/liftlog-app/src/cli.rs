//! CLI argument definitions for the liftlog application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::warn;

use liftlog_core::{BackendKind, LiftlogConfig};

/// Liftlog, a workout log with weekly volume reports.
#[derive(Parser, Debug)]
#[command(name = "liftlog", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend.
    #[arg(short = 'b', long = "backend", value_parser = ["csv", "sqlite"], global = true)]
    pub backend: Option<String>,

    /// Log file location, overriding the configured one.
    #[arg(short = 'p', long = "path", global = true)]
    pub path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a workout entry.
    Add {
        /// Exercise name.
        exercise: String,

        /// Number of sets.
        #[arg(long)]
        sets: i64,

        /// Repetitions per set.
        #[arg(long)]
        reps: i64,

        /// Weight moved per rep.
        #[arg(long)]
        weight: f64,

        /// Weight unit (kg, lbs).
        #[arg(long, default_value = "kg")]
        unit: String,

        /// Entry date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show logged entries, newest first.
    List {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Weekly training volume report.
    Weekly {
        /// Break the report down by exercise.
        #[arg(long = "per-exercise")]
        per_exercise: bool,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Export the full log as CSV.
    Export {
        /// Output file. Defaults to stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Insert a few example entries dated today.
    Seed,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > LIFTLOG_CONFIG env var > platform default
    /// (~/.liftlog/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("LIFTLOG_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the storage backend.
    ///
    /// Priority: --backend flag > LIFTLOG_BACKEND env var > config file value.
    /// An unrecognized env value is ignored with a warning.
    pub fn resolve_backend(&self, config_backend: BackendKind) -> BackendKind {
        if let Some(ref raw) = self.backend {
            if let Some(kind) = BackendKind::parse(raw) {
                return kind;
            }
        }
        if let Ok(raw) = std::env::var("LIFTLOG_BACKEND") {
            match BackendKind::parse(&raw) {
                Some(kind) => return kind,
                None => warn!("Unknown backend '{}' in LIFTLOG_BACKEND, ignoring", raw),
            }
        }
        config_backend
    }

    /// Resolve the log file location for the selected backend.
    ///
    /// Priority: --path flag > config file value for that backend.
    pub fn resolve_path(&self, config: &LiftlogConfig, backend: BackendKind) -> PathBuf {
        if let Some(ref p) = self.path {
            return p.clone();
        }
        PathBuf::from(config.storage.path_for(backend))
    }

    /// Resolve the log level for the tracing filter.
    ///
    /// Priority: --log-level flag > RUST_LOG env var > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        if let Some(ref level) = self.log_level {
            return level.clone();
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            return level;
        }
        config_level.to_string()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".liftlog").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".liftlog").join("config.toml");
    }
    PathBuf::from("config.toml")
}
