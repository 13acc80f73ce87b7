//! Log output for a program that owns the terminal.
//!
//! The UI draws on the alternate screen, so logs go to a file instead. Without a file nothing
//! is installed and the `tracing` macros are no-ops.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const FILTER_ENV: &str = "FOLIO_LOG";

/// Installs a global subscriber appending to `path`.
///
/// The filter comes from `FOLIO_LOG` and defaults to `info`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is already installed.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
