//! The view-state engine.
//!
//! `ViewState` is the single owner of the mutable view state: search text,
//! current page and selection. It keeps the three mutually consistent:
//!
//! - changing the search text recomputes the filtered set and resets the
//!   page to 1
//! - page requests outside `1..=total_pages` are rejected and leave the page
//!   unchanged
//! - select-all is scoped to the filtered set; refiltering never clears the
//!   selection
//! - replacing the roster prunes selected ids that no longer exist and clamps
//!   the page
//!
//! The filtered set is cached and only recomputed when the search text or the
//! roster changes. The visible page and page count are derived on read.

use crate::action::{ComposeError, Composer};
use crate::model::{OutboundBatch, Record, RecordId, Roster};
use crate::state::filter::{self, FilteredList};
use crate::state::observer::{TracingObserver, ViewEvent, ViewObserver};
use crate::state::pagination::{self, InvalidPageRequest, PageNumber, PageSize};
use crate::state::selection::{self, Selection, ToggleAllOutcome, UnknownRecord};
use std::ops::Range;

/// View-state engine over one roster.
#[derive(Debug)]
pub struct ViewState {
    roster: Roster,
    page_size: PageSize,
    page: PageNumber,
    filtered: FilteredList,
    selection: Selection,
    observer: Box<dyn ViewObserver>,
    #[cfg(test)]
    filter_runs: usize,
}

impl ViewState {
    /// Create an engine with an empty search, page 1 and no selection.
    ///
    /// Events go to a [`TracingObserver`].
    pub fn new(roster: Roster, page_size: PageSize) -> Self {
        Self::with_observer(roster, page_size, TracingObserver)
    }

    /// Create an engine reporting to a custom observer.
    pub fn with_observer(
        roster: Roster,
        page_size: PageSize,
        observer: impl ViewObserver + 'static,
    ) -> Self {
        let filtered = filter::filter(&roster, "");
        Self {
            roster,
            page_size,
            page: PageNumber::FIRST,
            filtered,
            selection: Selection::new(),
            observer: Box::new(observer),
            #[cfg(test)]
            filter_runs: 1,
        }
    }

    // ===== Roster =====

    /// The roster being viewed.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Replace the roster (reload).
    ///
    /// Re-applies the current search text, drops selected ids that are not in
    /// the new roster, and clamps the current page into the new page range.
    pub fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        let roster = &self.roster;
        let pruned = self.selection.retain(|id| roster.contains(id));
        self.recompute_filter(self.filtered.query().to_string());

        self.emit(ViewEvent::RosterReplaced {
            records: self.roster.len(),
            pruned,
        });
        if pruned > 0 {
            self.emit_selection();
        }

        let total = self.total_pages();
        if self.page.get() > total {
            self.page = PageNumber::new(total).unwrap_or(PageNumber::FIRST);
            self.emit_page();
        }
    }

    // ===== Filter =====

    /// Current search text. Empty means no filter.
    pub fn search_text(&self) -> &str {
        self.filtered.query()
    }

    /// Set the search text.
    ///
    /// Returns false (and does nothing) if the text is unchanged. Otherwise
    /// the filtered set is recomputed and the page resets to 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.filtered.query() {
            return false;
        }

        self.recompute_filter(text);
        self.emit(ViewEvent::FilterChanged {
            query: self.filtered.query().to_string(),
            matched: self.filtered.len(),
        });

        if self.page != PageNumber::FIRST {
            self.page = PageNumber::FIRST;
            self.emit_page();
        }
        true
    }

    /// The cached filtered set.
    pub fn filtered(&self) -> &FilteredList {
        &self.filtered
    }

    /// Records matching the search text, in roster order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> {
        self.filtered.records(&self.roster)
    }

    /// Identifiers matching the search text, in roster order.
    pub fn filtered_ids(&self) -> Vec<&RecordId> {
        self.filtered.ids(&self.roster).collect()
    }

    /// Number of records matching the search text.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// How many times the filter has been evaluated since construction.
    #[cfg(test)]
    pub(crate) fn filter_runs(&self) -> usize {
        self.filter_runs
    }

    // ===== Pagination =====

    /// Rows per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> PageNumber {
        self.page
    }

    /// Page count for the filtered set; at least 1.
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// Range of the visible page within the filtered set.
    pub fn visible_range(&self) -> Range<usize> {
        pagination::page_bounds(self.filtered.len(), self.page_size, self.page)
    }

    /// Records on the current page.
    pub fn visible_records(&self) -> Vec<&Record> {
        let page = pagination::paginate(self.filtered.positions(), self.page_size, self.page);
        let records = self.roster.records();
        page.items
            .iter()
            .filter_map(|&position| records.get(position))
            .collect()
    }

    /// Move to `requested`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageRequest` and leaves the page unchanged when
    /// `requested` is outside `1..=total_pages`.
    pub fn change_page(&mut self, requested: usize) -> Result<PageNumber, InvalidPageRequest> {
        let page = pagination::validate_page_request(requested, self.total_pages())?;
        if page != self.page {
            self.page = page;
            self.emit_page();
        }
        Ok(page)
    }

    /// Move one page forward.
    ///
    /// # Errors
    ///
    /// Fails on the last page.
    pub fn next_page(&mut self) -> Result<PageNumber, InvalidPageRequest> {
        self.change_page(self.page.get() + 1)
    }

    /// Move one page back.
    ///
    /// # Errors
    ///
    /// Fails on the first page.
    pub fn prev_page(&mut self) -> Result<PageNumber, InvalidPageRequest> {
        self.change_page(self.page.get() - 1)
    }

    /// Jump to page 1. Always succeeds.
    pub fn first_page(&mut self) -> PageNumber {
        self.change_page(1).unwrap_or(PageNumber::FIRST)
    }

    /// Jump to the last page. Always succeeds.
    pub fn last_page(&mut self) -> PageNumber {
        let last = self.total_pages();
        self.change_page(last).unwrap_or(self.page)
    }

    // ===== Selection =====

    /// The selected set.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// True if `id` is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    /// Number of selected records, including those outside the filter.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Number of filtered records that are selected.
    pub fn selected_in_filter(&self) -> usize {
        self.filtered
            .ids(&self.roster)
            .filter(|id| self.selection.contains(id))
            .count()
    }

    /// Flip selection of one record. Returns true if it is now selected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecord` for an id that is not in the roster.
    pub fn toggle_one(&mut self, id: &RecordId) -> Result<bool, UnknownRecord> {
        if !self.roster.contains(id) {
            return Err(UnknownRecord(id.clone()));
        }
        let now_selected = self.selection.toggle(id);
        self.emit_selection();
        Ok(now_selected)
    }

    /// Select every filtered record, or deselect them all if they already are.
    ///
    /// Selected records outside the filter are untouched.
    pub fn toggle_all(&mut self) -> ToggleAllOutcome {
        let filtered: Vec<&RecordId> = self.filtered.ids(&self.roster).collect();
        let outcome = selection::toggle_all(&mut self.selection, &filtered);
        if outcome != ToggleAllOutcome::Unchanged {
            self.emit_selection();
        }
        outcome
    }

    /// Deselect everything. Returns how many records were deselected.
    pub fn clear_selection(&mut self) -> usize {
        let removed = self.selection.clear();
        if removed > 0 {
            self.emit_selection();
        }
        removed
    }

    /// Header checkbox state. False whenever the filtered set is empty.
    pub fn select_all_indicator(&self) -> bool {
        selection::select_all_indicator(&self.selection, &self.filtered_ids())
    }

    // ===== Bulk action =====

    /// Compose one outbound message per selected record.
    ///
    /// # Errors
    ///
    /// `ComposeError::EmptySelection` when nothing is selected.
    pub fn compose(&self, composer: &Composer) -> Result<OutboundBatch, ComposeError> {
        composer.compose(&self.roster, &self.selection)
    }

    // ===== Internals =====

    fn recompute_filter(&mut self, text: String) {
        self.filtered = filter::filter(&self.roster, &text);
        #[cfg(test)]
        {
            self.filter_runs += 1;
        }
    }

    fn emit(&mut self, event: ViewEvent) {
        self.observer.on_event(&event);
    }

    fn emit_page(&mut self) {
        let event = ViewEvent::PageChanged {
            page: self.page.get(),
            total_pages: self.total_pages(),
        };
        self.emit(event);
    }

    fn emit_selection(&mut self) {
        let event = ViewEvent::SelectionChanged {
            selected: self.selection.iter().cloned().collect(),
        };
        self.emit(event);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
