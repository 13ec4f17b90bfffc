//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent operator intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor down on the visible page. Default: j/↓
    CursorDown,
    /// Move the row cursor up on the visible page. Default: k/↑
    CursorUp,

    // Selection
    /// Toggle selection of the row under the cursor. Default: Space
    ToggleRow,
    /// Select or deselect every filtered record. Default: a
    ToggleAll,
    /// Deselect everything, including records outside the filter. Default: x
    ClearSelection,

    // Pagination
    /// Go to the next page. Default: n/→/Page Down
    NextPage,
    /// Go to the previous page. Default: p/←/Page Up
    PrevPage,
    /// Go to the first page. Default: g/Home
    FirstPage,
    /// Go to the last page. Default: G/End
    LastPage,
    /// Go to a specific page. Field: 1-based page number (1-9)
    GoToPage(usize),

    // Search
    /// Focus the search input. Default: //Ctrl+f
    StartSearch,
    /// Clear the search text and leave the input. Default: Esc
    CancelSearch,

    // Bulk action
    /// Compose the bulk message for the current selection. Default: m
    ComposeMessage,

    // Application
    /// Reload the roster from its source. Default: r
    Reload,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
