//! Application state.
//!
//! `AppState` wraps the view-state engine with the UI-only state the shell
//! needs: which pane has focus, the row cursor on the visible page, the
//! search input, the help overlay and the status-bar notice.

use crate::model::Record;
use crate::state::search_input_handler::SearchInput;
use crate::state::view_state::ViewState;

// ===== AppState =====

/// Application state. No terminal or I/O access.
#[derive(Debug)]
pub struct AppState {
    /// Search, pagination and selection engine.
    pub view: ViewState,

    /// Text in the search bar. Mirrored into `view` by [`AppState::sync_search`].
    pub search: SearchInput,

    /// Which pane receives keyboard input.
    pub focus: FocusPane,

    /// Row cursor, 0-based within the visible page.
    pub cursor: usize,

    /// Whether the help overlay is shown.
    pub help_visible: bool,

    /// Last operator-facing message, shown in the status bar.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Fresh state: table focused, cursor on the first row, no notice.
    pub fn new(view: ViewState) -> Self {
        let search = SearchInput::new(view.search_text());
        Self {
            view,
            search,
            focus: FocusPane::Table,
            cursor: 0,
            help_visible: false,
            notice: None,
        }
    }

    /// Push the search bar text into the engine.
    ///
    /// A changed query refilters and resets the page, so the cursor returns
    /// to the first row.
    pub fn sync_search(&mut self) {
        if self.view.set_search_text(self.search.text()) {
            self.cursor = 0;
        }
    }

    /// Number of rows on the visible page.
    pub fn visible_len(&self) -> usize {
        self.view.visible_range().len()
    }

    /// Record under the cursor, if the page has any rows.
    pub fn cursor_record(&self) -> Option<&Record> {
        self.view.visible_records().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible page.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }

    /// Replace the status-bar notice.
    pub fn set_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }
}

// ===== FocusPane =====

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The record table (navigation keys).
    #[default]
    Table,
    /// The search bar (typing edits the query).
    Search,
}

// ===== Notice =====

/// Severity of a status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Success or neutral information.
    Info,
    /// The request was ignored (for example compose with nothing selected).
    Warning,
    /// An operation failed.
    Error,
}

/// Message shown to the operator in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text.
    pub text: String,
}
