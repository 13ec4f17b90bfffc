//! Error types for the rollcall application.
//!
//! This module defines the fatal side of the error taxonomy using `thiserror`.
//! Errors compose via `?` and `From` conversions into [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`RosterError`] - Roster loading failures (missing source, unreadable or
//!     malformed file, duplicate ids)
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`TuiError`] - Terminal set-up or drawing failures
//!
//! # Recovery Strategy
//!
//! Interaction-level failures are **not** here: an out-of-range page request
//! (`InvalidPageRequest`) is ignored, an empty bulk selection
//! (`ComposeError::EmptySelection`) becomes an operator notice, and a failed
//! hand-off (`DeliveryError`) is logged and shown in the status bar. Only
//! start-up failures reach `AppError`. A roster error during reload keeps the
//! previously loaded roster.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::RecordId;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// # Examples
///
/// ```no_run
/// use rollcall::model::error::{AppError, RosterError};
///
/// fn start() -> Result<(), AppError> {
///     // RosterError converts to AppError via From
///     load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), RosterError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The roster could not be loaded.
    #[error("Failed to load roster: {0}")]
    Roster(#[from] RosterError),

    /// The config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The terminal UI failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors encountered when loading a roster.
///
/// # Recovery Patterns
///
/// - **NoSource**: display usage hint and exit
/// - **FileNotFound / Io / Parse**: display the path (and line) and exit at
///   start-up; keep the old roster on reload
/// - **DuplicateId**: the source violates id uniqueness; same as Parse
#[derive(Debug, Error)]
pub enum RosterError {
    /// Neither a roster file nor the demo roster was requested.
    #[error("No roster source: provide a roster file path or pass --demo")]
    NoSource,

    /// The roster file does not exist.
    #[error("Roster file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The roster file exists but could not be read.
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The roster file content is malformed.
    ///
    /// `line` is set for JSONL sources (1-based).
    #[error("Invalid roster data in {path}{}: {reason}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Line number for line-oriented sources.
        line: Option<usize>,
        /// Parser message.
        reason: String,
    },

    /// Two records share the same identifier.
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),
}
