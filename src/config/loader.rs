//! Configuration file loading with precedence handling.

use crate::action::MessageTemplates;
use crate::state::pagination::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ROLLCALL_CONFIG";
/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV: &str = "ROLLCALL_PAGE_SIZE";
/// Environment variable overriding the roster path.
pub const ROSTER_ENV: &str = "ROLLCALL_ROSTER";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an invalid value.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Raw value as found in the environment.
        value: String,
        /// What was expected.
        reason: &'static str,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/rollcall/config.toml`:
///
/// ```toml
/// page_size = 25
/// roster = "/srv/course/roster.json"
/// outbox = "/srv/course/outbox.jsonl"
///
/// [templates]
/// subject = "News for {{label}}"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Roster file loaded when none is given on the command line.
    #[serde(default)]
    pub roster: Option<PathBuf>,

    /// Outbox file for composed messages.
    #[serde(default)]
    pub outbox: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Message templates.
    #[serde(default)]
    pub templates: Option<TemplatesSection>,
}

/// `[templates]` section. Missing entries fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesSection {
    /// Subject template.
    #[serde(default)]
    pub subject: Option<String>,

    /// Body template.
    #[serde(default)]
    pub body: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: PageSize,
    /// Roster file, if any source named one.
    pub roster: Option<PathBuf>,
    /// Outbox file for composed messages.
    pub outbox_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Message templates.
    pub templates: MessageTemplates,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            roster: None,
            outbox_path: default_outbox_path(),
            log_file_path: default_log_path(),
            templates: MessageTemplates::default(),
        }
    }
}

fn state_file(name: &str) -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("rollcall").join(name),
        None => PathBuf::from(name),
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rollcall/rollcall.log` on Unix-like systems.
/// Falls back to the current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    state_file("rollcall.log")
}

/// Resolve default outbox path, next to the log file.
pub fn default_outbox_path() -> PathBuf {
    state_file("outbox.jsonl")
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        debug!(path = %path.display(), "No config file");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), "Loaded config file");
    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rollcall/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if there is no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rollcall").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROLLCALL_CONFIG` environment variable
/// 3. Default path `~/.config/rollcall/config.toml`
///
/// Missing config files are not errors.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `ROLLCALL_CONFIG` is not valid Unicode.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let templates = config.templates.unwrap_or_default();

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        roster: config.roster.or(defaults.roster),
        outbox_path: config.outbox.unwrap_or(defaults.outbox_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        templates: MessageTemplates {
            subject: templates.subject.unwrap_or(defaults.templates.subject),
            body: templates.body.unwrap_or(defaults.templates.body),
        },
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROLLCALL_PAGE_SIZE`: rows per page
/// - `ROLLCALL_ROSTER`: roster file (ignored when empty)
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvValue` if `ROLLCALL_PAGE_SIZE` is set but
/// is not a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV) {
        config.page_size = raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(PageSize::new)
            .ok_or(ConfigError::InvalidEnvValue {
                var: PAGE_SIZE_ENV,
                value: raw,
                reason: "expected a positive integer",
            })?;
    }

    if let Ok(roster) = std::env::var(ROSTER_ENV) {
        if !roster.is_empty() {
            config.roster = Some(PathBuf::from(roster));
        }
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user set are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<PageSize>,
    roster_override: Option<PathBuf>,
    outbox_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(roster) = roster_override {
        config.roster = Some(roster);
    }

    if let Some(outbox) = outbox_override {
        config.outbox_path = outbox;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
