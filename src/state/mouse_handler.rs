//! Mouse event handler.
//!
//! The renderer records where clickable things were drawn as
//! [`ClickRegion`]s. A click is resolved against those regions and then
//! applied through the same transitions as the keyboard.

use crate::model::KeyAction;
use crate::state::action_handler::{handle_action, Effect};
use crate::state::app_state::AppState;
use ratatui::layout::{Position, Rect};

/// Something the operator can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A table row, 0-based within the visible page.
    Row(usize),
    /// The header "select all" checkbox.
    SelectAll,
    /// Pager "Previous" control.
    PrevPage,
    /// Pager "Next" control.
    NextPage,
    /// Pager page number (1-based).
    Page(usize),
}

/// Screen area of a clickable target from the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    /// Where the target was drawn.
    pub area: Rect,
    /// What clicking it does.
    pub target: ClickTarget,
}

impl ClickRegion {
    /// Region covering `area`.
    pub fn new(area: Rect, target: ClickTarget) -> Self {
        Self { area, target }
    }
}

/// Find the target under (`column`, `row`). Later regions win on overlap.
pub fn detect_click(column: u16, row: u16, regions: &[ClickRegion]) -> Option<ClickTarget> {
    let position = Position::new(column, row);
    regions
        .iter()
        .rev()
        .find(|region| region.area.contains(position))
        .map(|region| region.target)
}

/// Apply a click. Clicks are ignored while the help overlay is open.
pub fn handle_click(state: &mut AppState, target: ClickTarget) -> Effect {
    if state.help_visible {
        return Effect::None;
    }

    let action = match target {
        ClickTarget::Row(index) => {
            if index >= state.visible_len() {
                return Effect::None;
            }
            state.cursor = index;
            KeyAction::ToggleRow
        }
        ClickTarget::SelectAll => KeyAction::ToggleAll,
        ClickTarget::PrevPage => KeyAction::PrevPage,
        ClickTarget::NextPage => KeyAction::NextPage,
        ClickTarget::Page(page) => KeyAction::GoToPage(page),
    };
    handle_action(state, action)
}
