//! Filter stage (pure).
//!
//! Derives the filtered view of the roster from the search text.
//! Matching is a case-insensitive substring test against the display name
//! only. The empty string matches every record.

use crate::model::{Record, RecordId, Roster};

// ===== FilteredList =====

/// Roster positions whose display name matches a query, in roster order.
///
/// Stores positions rather than records so the result can be cached next to
/// the roster it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredList {
    query: String,
    positions: Vec<usize>,
}

impl FilteredList {
    /// The search text this list was computed for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matching roster positions, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Resolve the matching records against the roster they came from.
    pub fn records<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = &'a Record> + 'a {
        let records = roster.records();
        self.positions.iter().filter_map(move |&p| records.get(p))
    }

    /// Identifiers of the matching records, in roster order.
    pub fn ids<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = &'a RecordId> + 'a {
        self.records(roster).map(Record::id)
    }
}

// ===== Operations =====

/// True if `name` contains the already-lowercased query.
pub fn name_matches(name: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || name.to_lowercase().contains(query_lower)
}

/// Filter the roster by display name.
///
/// Stable: matching records keep their relative roster order. An unmatched
/// query yields an empty list, never an error.
pub fn filter(roster: &Roster, search_text: &str) -> FilteredList {
    let query_lower = search_text.to_lowercase();
    let positions = roster
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| name_matches(record.name(), &query_lower))
        .map(|(position, _)| position)
        .collect();

    FilteredList {
        query: search_text.to_string(),
        positions,
    }
}

// ===== Tests =====
