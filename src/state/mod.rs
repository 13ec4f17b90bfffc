//! View state (pure).
//!
//! The filter, pagination and selection stages are pure functions over the
//! roster. [`ViewState`] keeps their results consistent; [`AppState`] adds the
//! UI-only state the shell needs. Nothing here touches the terminal.

pub mod action_handler;
pub mod app_state;
pub mod filter;
pub mod mouse_handler;
pub mod observer;
pub mod pagination;
pub mod search_input_handler;
pub mod selection;
pub mod view_state;

// Re-export for convenience
pub use action_handler::{handle_action, Effect};
pub use app_state::{AppState, FocusPane, Notice, NoticeLevel};
pub use filter::{filter, FilteredList};
pub use mouse_handler::{detect_click, handle_click, ClickRegion, ClickTarget};
pub use observer::{RecordingObserver, TracingObserver, ViewEvent, ViewObserver};
pub use pagination::{
    page_bounds, paginate, total_pages, validate_page_request, InvalidPageRequest, Page,
    PageNumber, PageSize, DEFAULT_PAGE_SIZE,
};
pub use search_input_handler::SearchInput;
pub use selection::{select_all_indicator, toggle_all, Selection, ToggleAllOutcome, UnknownRecord};
pub use view_state::ViewState;
