//! Roster records and the immutable roster store.

use crate::model::error::RosterError;
use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ===== Record =====

/// A single enrolment record. Immutable once loaded.
///
/// Field aliases accept the original export shape
/// (`student_name`, `course_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    #[serde(alias = "student_name")]
    name: String,
    email: String,
    #[serde(alias = "course_name")]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl Record {
    /// Create a record without a resource link.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            label: label.into(),
            link: None,
        }
    }

    /// Attach a resource link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Display name. The only field the search filter matches against.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Associated label (course name).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional resource link.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

// ===== Roster =====

/// The immutable source collection of records.
///
/// Preserves load order and indexes records by id.
/// Construction enforces identifier uniqueness.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Record>,
    index: HashMap<RecordId, usize>,
}

impl Roster {
    /// Build a roster, rejecting duplicate identifiers.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DuplicateId` for the first repeated id.
    pub fn new(records: Vec<Record>) -> Result<Self, RosterError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(RosterError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// True if a record with this id exists.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }
}
