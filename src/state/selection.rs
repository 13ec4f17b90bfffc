//! Selection stage (pure).
//!
//! Tracks which record identifiers the operator has chosen. The selection is
//! independent of the current filter and page: refiltering never clears it.
//! Select-all operations are scoped to the filtered identifiers passed in.

use crate::model::RecordId;
use std::collections::HashSet;
use thiserror::Error;

// ===== Selection =====

/// Set of selected record identifiers, enumerated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    order: Vec<RecordId>,
    members: HashSet<RecordId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected identifiers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if `id` is selected.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.members.contains(id)
    }

    /// Selected identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.order.iter()
    }

    /// Add `id`. Returns false if it was already selected.
    pub fn insert(&mut self, id: RecordId) -> bool {
        if self.members.insert(id.clone()) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    /// Remove `id`. Returns false if it was not selected.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        if self.members.remove(id) {
            self.order.retain(|selected| selected != id);
            true
        } else {
            false
        }
    }

    /// Flip membership of `id`. Returns true if it is now selected.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id.clone())
        }
    }

    /// Deselect everything. Returns how many identifiers were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.order.len();
        self.order.clear();
        self.members.clear();
        removed
    }

    /// Keep only identifiers for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) -> usize {
        let before = self.order.len();
        self.order.retain(|id| keep(id));
        self.members = self.order.iter().cloned().collect();
        before - self.order.len()
    }
}

// ===== Errors =====

/// A toggle was requested for an identifier the roster does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Record {0} is not in the roster")]
pub struct UnknownRecord(pub RecordId);

// ===== Select All =====

/// What a select-all toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAllOutcome {
    /// Filtered identifiers were added; holds how many were newly selected.
    Selected(usize),
    /// Every filtered identifier was deselected; holds how many.
    Deselected(usize),
    /// The filtered set was empty.
    Unchanged,
}

/// Toggle every filtered identifier.
///
/// If all of `filtered` are already selected they are all deselected;
/// otherwise every one of them is selected (in `filtered` order). Selected
/// identifiers outside `filtered` are left alone.
pub fn toggle_all(selection: &mut Selection, filtered: &[&RecordId]) -> ToggleAllOutcome {
    if filtered.is_empty() {
        return ToggleAllOutcome::Unchanged;
    }

    if filtered.iter().all(|id| selection.contains(id)) {
        let removed: HashSet<&RecordId> = filtered.iter().copied().collect();
        selection.order.retain(|id| !removed.contains(id));
        for id in &removed {
            selection.members.remove(*id);
        }
        ToggleAllOutcome::Deselected(removed.len())
    } else {
        let added = filtered
            .iter()
            .filter(|id| selection.insert((**id).clone()))
            .count();
        ToggleAllOutcome::Selected(added)
    }
}

/// State of the header "select all" checkbox.
///
/// True iff the filtered set is non-empty, the selection has exactly as many
/// identifiers as the filtered set, and every filtered identifier is selected.
/// A stale selection outside the filter therefore reads as not-all-selected,
/// and an empty filtered set always reads false.
pub fn select_all_indicator(selection: &Selection, filtered: &[&RecordId]) -> bool {
    !filtered.is_empty()
        && selection.len() == filtered.len()
        && filtered.iter().all(|id| selection.contains(id))
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
