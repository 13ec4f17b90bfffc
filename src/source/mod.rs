//! Roster sources.
//!
//! A roster comes from a JSON/JSONL file or from the built-in demo data.
//! Reload re-reads the same source.

use crate::model::{Roster, RosterError};
use std::fmt;
use std::path::PathBuf;

pub mod demo;
pub mod file;

pub use demo::demo_records;
pub use file::load_roster_file;

/// Where the roster is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// A JSON array file, or JSON Lines when the extension is `.jsonl`.
    File(PathBuf),
    /// The built-in demo roster.
    Demo,
}

impl RosterSource {
    /// Pick a source from the resolved settings. `--demo` wins over a path.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::NoSource` when neither is given.
    pub fn select(path: Option<PathBuf>, demo: bool) -> Result<Self, RosterError> {
        match (demo, path) {
            (true, _) => Ok(RosterSource::Demo),
            (false, Some(path)) => Ok(RosterSource::File(path)),
            (false, None) => Err(RosterError::NoSource),
        }
    }

    /// Load a fresh, validated roster.
    ///
    /// # Errors
    ///
    /// Propagates file read, parse and duplicate-id errors.
    pub fn load(&self) -> Result<Roster, RosterError> {
        match self {
            RosterSource::File(path) => load_roster_file(path),
            RosterSource::Demo => Roster::new(demo_records()),
        }
    }
}

impl fmt::Display for RosterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterSource::File(path) => write!(f, "{}", path.display()),
            RosterSource::Demo => f.write_str("demo roster"),
        }
    }
}
