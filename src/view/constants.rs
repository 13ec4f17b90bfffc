//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
///
/// Shown while the search bar is focused or holds a query.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pager row in lines.
pub const PAGER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the checkbox column, including its padding.
pub const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Spacing between table columns.
pub const COLUMN_SPACING: u16 = 2;

/// Most page numbers the pager shows before collapsing ranges into gaps.
pub const MAX_PAGE_LINKS: usize = 7;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
