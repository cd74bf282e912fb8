pub mod config;
pub mod error;
pub mod types;

pub use config::{BackendKind, LiftlogConfig};
pub use error::{LiftlogError, Result};
pub use types::*;
