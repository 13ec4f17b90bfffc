//! Observability hook for the view-state engine.
//!
//! The engine never logs on its own. Every state change is reported as a
//! [`ViewEvent`] to the installed [`ViewObserver`].

use crate::model::RecordId;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// A state change in the view-state engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The search text changed and the filtered set was recomputed.
    FilterChanged {
        /// New search text.
        query: String,
        /// Number of matching records.
        matched: usize,
    },
    /// The current page changed.
    PageChanged {
        /// New 1-based page.
        page: usize,
        /// Page count.
        total_pages: usize,
    },
    /// The selected set changed.
    SelectionChanged {
        /// Selected identifiers in enumeration order.
        selected: Vec<RecordId>,
    },
    /// The roster was replaced (reload).
    RosterReplaced {
        /// Records in the new roster.
        records: usize,
        /// Selected identifiers dropped because they no longer exist.
        pruned: usize,
    },
}

/// Receives engine events.
pub trait ViewObserver: fmt::Debug {
    /// Called after each state change.
    fn on_event(&mut self, event: &ViewEvent);
}

/// Default observer: emits `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ViewObserver for TracingObserver {
    fn on_event(&mut self, event: &ViewEvent) {
        match event {
            ViewEvent::FilterChanged { query, matched } => {
                debug!(query = %query, matched, "Filter changed");
            }
            ViewEvent::PageChanged { page, total_pages } => {
                debug!(page, total_pages, "Page changed");
            }
            ViewEvent::SelectionChanged { selected } => {
                debug!(count = selected.len(), selected = ?selected, "Selection changed");
            }
            ViewEvent::RosterReplaced { records, pruned } => {
                debug!(records, pruned, "Roster replaced");
            }
        }
    }
}

/// Observer that keeps every event; clones share the same log.
///
/// Useful for asserting on engine behaviour from tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingObserver {
    /// Create an observer with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl ViewObserver for RecordingObserver {
    fn on_event(&mut self, event: &ViewEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
