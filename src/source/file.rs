//! Roster files.
//!
//! `.jsonl` files hold one record object per line; anything else is read as
//! a single JSON array of records.

use crate::model::{Record, Roster, RosterError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Load and validate a roster file.
///
/// # Errors
///
/// - `FileNotFound` if `path` does not exist
/// - `Io` for other read failures
/// - `Parse` for malformed JSON or records (with the line number when known)
/// - `DuplicateId` if two records share an id
pub fn load_roster_file(path: &Path) -> Result<Roster, RosterError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RosterError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => RosterError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = if is_jsonl(path) {
        parse_jsonl(path, &contents)?
    } else {
        parse_json_array(path, &contents)?
    };

    let roster = Roster::new(records)?;
    info!(path = %path.display(), records = roster.len(), "Roster loaded");
    Ok(roster)
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
}

fn parse_json_array(path: &Path, contents: &str) -> Result<Vec<Record>, RosterError> {
    serde_json::from_str(contents).map_err(|e| RosterError::Parse {
        path: path.to_path_buf(),
        line: Some(e.line()).filter(|&line| line > 0),
        reason: e.to_string(),
    })
}

/// Parse JSON Lines. Blank lines are skipped; line numbers are 1-based.
fn parse_jsonl(path: &Path, contents: &str) -> Result<Vec<Record>, RosterError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| RosterError::Parse {
                path: path.to_path_buf(),
                line: Some(index + 1),
                reason: e.to_string(),
            })
        })
        .collect()
}
