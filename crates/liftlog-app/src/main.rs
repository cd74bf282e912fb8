//! Liftlog binary - composition root.
//!
//! Ties the crates together:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing with the resolved log level
//! 4. Open the selected storage backend
//! 5. Dispatch the subcommand and print its output

mod cli;
mod commands;

use clap::Parser;
use tracing::debug;

use liftlog_core::{LiftlogConfig, LiftlogError};
use liftlog_storage::open_store;

use cli::{CliArgs, Command};

fn main() {
    let args = CliArgs::parse();

    // Config is read before tracing is up so the configured log level can
    // seed the filter. Log lines emitted during the load are dropped.
    let config_file = args.resolve_config_path();
    let config = LiftlogConfig::load_or_default(&config_file);

    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .init();

    debug!("Starting liftlog v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration loaded from {}", config_file.display());

    let backend = args.resolve_backend(config.storage.backend);
    let path = args.resolve_path(&config, backend);
    debug!("Using {} backend at {}", backend.as_str(), path.display());

    let store = open_store(backend, &path);
    let result = match args.command {
        Command::Add {
            exercise,
            sets,
            reps,
            weight,
            unit,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::add(store.as_ref(), date, exercise, sets, reps, weight, &unit)
        }
        Command::List { json } => commands::list(store.as_ref(), json),
        Command::Weekly { per_exercise, json } => {
            commands::weekly(store.as_ref(), per_exercise, json)
        }
        Command::Export { output } => commands::export(store.as_ref(), output.as_deref()),
        Command::Seed => commands::seed(store.as_ref()),
    };

    match result {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Err(LiftlogError::Validation(problems)) => {
            eprintln!("Entry not saved:");
            for problem in problems {
                eprintln!("  - {}", problem);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
