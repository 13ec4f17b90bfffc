//! Screen layout.
//!
//! Stacks the header, the optional search bar, the roster table, the pager
//! and the status bar, and collects the click regions drawn this frame.

use crate::state::{AppState, ClickRegion, FocusPane};
use crate::view::constants::{
    HEADER_HEIGHT, PAGER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::help::render_help_overlay;
use crate::view::pager::render_pager;
use crate::view::search_input::SearchBar;
use crate::view::styles::Palette;
use crate::view::table::render_table;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TABLE_HINTS: &str =
    "j/k: move  Space: toggle  a: all  n/p: page  /: search  m: compose  ?: help  q: quit";
const SEARCH_HINTS: &str = "Type to filter  Enter: done  Esc: clear";

/// Render one frame. Returns the click regions for mouse hit testing.
///
/// The help overlay, when open, is drawn last and covers everything.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    source_label: &str,
    palette: &Palette,
) -> Vec<ClickRegion> {
    let mut regions = Vec::new();
    let show_search = state.focus == FocusPane::Search || !state.search.is_empty();
    let search_height = if show_search { SEARCH_INPUT_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(PAGER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, source_label, palette);
    if show_search {
        frame.render_widget(
            SearchBar::new(
                &state.search,
                state.focus == FocusPane::Search,
                state.view.filtered_count(),
                palette,
            ),
            chunks[1],
        );
    }
    render_table(frame, chunks[2], state, palette, &mut regions);
    render_pager(
        frame,
        chunks[3],
        state.view.current_page().get(),
        state.view.total_pages(),
        palette,
        &mut regions,
    );
    render_status_bar(frame, chunks[4], state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
    }
    regions
}

/// Header: title, roster source, selection count and filter count.
fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    source_label: &str,
    palette: &Palette,
) {
    let view = &state.view;
    let line = Line::from(vec![
        Span::styled("rollcall", palette.title),
        Span::styled(format!(" | {}", source_label), palette.muted),
        Span::raw(format!(" | {} selected", view.selected_count())),
        Span::styled(
            format!(
                " | {} of {} records",
                view.filtered_count(),
                view.roster().len()
            ),
            palette.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn status_text(state: &AppState) -> &str {
    match (&state.notice, state.focus) {
        (Some(notice), _) => notice.text.as_str(),
        (None, FocusPane::Search) => SEARCH_HINTS,
        (None, FocusPane::Table) => TABLE_HINTS,
    }
}

/// Status bar: the latest notice, or hints for the focused pane.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let style = match &state.notice {
        Some(notice) => palette.notice(notice.level),
        None => palette.muted,
    };
    let paragraph = Paragraph::new(Line::from(status_text(state))).style(style);
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
