//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the default key bindings grouped by
//! category. Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 16;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[
            ("j/↓  k/↑", "Move cursor"),
            ("Space", "Toggle record under cursor"),
            ("Click row", "Toggle record"),
        ],
    ),
    (
        "Selection",
        &[
            ("a", "Select / deselect all matching"),
            ("x", "Clear selection"),
        ],
    ),
    (
        "Pages",
        &[
            ("n/→/PgDn", "Next page"),
            ("p/←/PgUp", "Previous page"),
            ("g/Home G/End", "First / last page"),
            ("1-9", "Go to page"),
        ],
    ),
    (
        "Search",
        &[
            ("/  Ctrl+f", "Search by name"),
            ("Enter", "Keep filter, back to table"),
            ("Esc", "Clear search"),
        ],
    ),
    (
        "Actions",
        &[
            ("m", "Compose message to selected"),
            ("r", "Reload roster"),
            ("?", "Toggle this help"),
            ("q  Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (category, entries)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(*category, palette.column_header));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<KEY_COLUMN_WIDTH$}", keys), palette.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
