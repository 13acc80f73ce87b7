//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! We look for a folio.toml in the working directory (or the path given with `--config`) and
//! load scrolling, animation and layout settings from it.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_PATH: &str = "folio.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Viewer preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Display units between the scroll offset and the active-section probe.
    pub lookahead: u32,
    #[facet(default = 20)]
    /// Display units per terminal row.
    pub line_height: u32,
    #[facet(default = 3)]
    /// Rows scrolled per mouse wheel notch.
    pub scroll_step: u16,
    #[facet(default = 50)]
    /// Redraw interval in milliseconds while animations run.
    pub tick_rate_ms: u64,
    #[facet(default = 80)]
    /// Terminal width below which the nav collapses into a menu.
    pub compact_width: u16,
    #[facet(default = true)]
    /// Whether sections fade in as they scroll into view.
    pub animations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookahead: crate::tracker::LOOKAHEAD,
            line_height: 20,
            scroll_step: 3,
            tick_rate_ms: 50,
            compact_width: 80,
            animations: true,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid configuration.
    pub fn parse(contents: &str, origin: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    #[must_use]
    /// Load configuration from folio.toml if present.
    ///
    /// A missing file silently yields the defaults; an unreadable or invalid one is logged and
    /// ignored.
    pub fn load() -> Self {
        let path = Path::new(DEFAULT_PATH);
        if !path.exists() {
            return Self::default();
        }
        Self::from_path(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring {DEFAULT_PATH}");
            Self::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
