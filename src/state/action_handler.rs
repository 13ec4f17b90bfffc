//! Key action dispatch (pure state transitions).
//!
//! Actions that only touch state are applied here. Actions that need the
//! outside world (quitting, composing, reloading) come back as an
//! [`Effect`] for the shell to carry out.

use crate::model::KeyAction;
use crate::state::app_state::{AppState, FocusPane, NoticeLevel};
use crate::state::search_input_handler;
use crate::state::selection::ToggleAllOutcome;
use tracing::debug;

/// Work left for the shell after an action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing further.
    None,
    /// Leave the event loop.
    Quit,
    /// Compose a batch for the selection and deliver it.
    Compose,
    /// Re-read the roster from its source.
    Reload,
}

/// Apply `action` to `state`.
///
/// While the help overlay is visible only `Help`, `CancelSearch` (closes the
/// overlay) and `Quit` are honoured.
pub fn handle_action(state: &mut AppState, action: KeyAction) -> Effect {
    if state.help_visible {
        match action {
            KeyAction::Help | KeyAction::CancelSearch => state.help_visible = false,
            KeyAction::Quit => return Effect::Quit,
            _ => {}
        }
        return Effect::None;
    }

    match action {
        KeyAction::CursorDown => {
            if state.cursor + 1 < state.visible_len() {
                state.cursor += 1;
            }
        }
        KeyAction::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
        }
        KeyAction::ToggleRow => toggle_cursor_row(state),
        KeyAction::ToggleAll => match state.view.toggle_all() {
            ToggleAllOutcome::Selected(added) => {
                state.set_notice(NoticeLevel::Info, format!("Selected {} records", added));
            }
            ToggleAllOutcome::Deselected(removed) => {
                state.set_notice(NoticeLevel::Info, format!("Deselected {} records", removed));
            }
            ToggleAllOutcome::Unchanged => {
                state.set_notice(NoticeLevel::Warning, "No records match the search");
            }
        },
        KeyAction::ClearSelection => {
            let removed = state.view.clear_selection();
            if removed > 0 {
                state.set_notice(NoticeLevel::Info, format!("Cleared {} selected", removed));
            }
        }

        KeyAction::NextPage
        | KeyAction::PrevPage
        | KeyAction::FirstPage
        | KeyAction::LastPage
        | KeyAction::GoToPage(_) => navigate_page(state, action),

        KeyAction::StartSearch => {
            state.focus = FocusPane::Search;
        }
        KeyAction::CancelSearch => {
            state.search = search_input_handler::clear_search(std::mem::take(&mut state.search));
            state.sync_search();
            state.focus = FocusPane::Table;
        }

        KeyAction::ComposeMessage => return Effect::Compose,
        KeyAction::Reload => return Effect::Reload,
        KeyAction::Help => state.help_visible = true,
        KeyAction::Quit => return Effect::Quit,
    }

    Effect::None
}

fn toggle_cursor_row(state: &mut AppState) {
    let Some(id) = state.cursor_record().map(|record| record.id().clone()) else {
        return;
    };
    // The id comes from the visible page, so it is always in the roster
    if let Err(err) = state.view.toggle_one(&id) {
        debug!(error = %err, "Row toggle ignored");
    }
}

/// Page moves that fall outside `1..=total_pages` are ignored.
fn navigate_page(state: &mut AppState, action: KeyAction) {
    let view = &mut state.view;
    let result = match action {
        KeyAction::NextPage => view.next_page(),
        KeyAction::PrevPage => view.prev_page(),
        KeyAction::FirstPage => Ok(view.first_page()),
        KeyAction::LastPage => Ok(view.last_page()),
        KeyAction::GoToPage(page) => view.change_page(page),
        _ => return,
    };

    match result {
        Ok(_) => state.clamp_cursor(),
        Err(err) => debug!(error = %err, "Page request ignored"),
    }
}
