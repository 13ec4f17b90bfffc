//! Roster table: checkbox, NAME, EMAIL and COURSE columns for the visible
//! page.

use crate::state::{AppState, ClickRegion, ClickTarget, FocusPane};
use crate::view::constants::{CHECKBOX_COLUMN_WIDTH, COLUMN_SPACING};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

fn column_constraints() -> [Constraint; 4] {
    [
        Constraint::Length(CHECKBOX_COLUMN_WIDTH),
        Constraint::Fill(3),
        Constraint::Fill(4),
        Constraint::Fill(3),
    ]
}

/// Cut `text` to at most `width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        CHECKED
    } else {
        UNCHECKED
    }
}

/// Render the table into `area` and record its clickable regions.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    regions: &mut Vec<ClickRegion>,
) {
    let view = &state.view;
    let range = view.visible_range();
    let title = if range.is_empty() {
        " Records ".to_string()
    } else {
        format!(
            " Records {}-{} of {} ",
            range.start + 1,
            range.end,
            view.filtered_count()
        )
    };

    let mut block = Block::default().borders(Borders::ALL).title(title);
    if state.focus == FocusPane::Table {
        block = block.border_style(palette.focused_border);
    }
    let inner = block.inner(area);

    let columns = Layout::horizontal(column_constraints())
        .spacing(COLUMN_SPACING)
        .split(inner);
    let width_of = |index: usize| usize::from(columns[index].width);

    let header = Row::new(vec![
        Cell::from(checkbox(view.select_all_indicator())),
        Cell::from("NAME"),
        Cell::from("EMAIL"),
        Cell::from("COURSE"),
    ])
    .style(palette.column_header);

    let visible = view.visible_records();
    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let selected = view.is_selected(record.id());
            let mut style = if selected {
                palette.selected_row
            } else {
                Style::new()
            };
            if index == state.cursor && state.focus == FocusPane::Table {
                style = style.patch(palette.cursor_row);
            }
            Row::new(vec![
                Cell::from(checkbox(selected)),
                Cell::from(truncate_to_width(record.name(), width_of(1))),
                Cell::from(truncate_to_width(record.email(), width_of(2))),
                Cell::from(truncate_to_width(record.label(), width_of(3))),
            ])
            .style(style)
        })
        .collect();

    if rows.is_empty() {
        let message = if view.roster().is_empty() {
            "The roster is empty"
        } else {
            "No records match the search"
        };
        frame.render_widget(block, area);
        if inner.height > 1 {
            let body = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            frame.render_widget(Line::styled(message, palette.muted), body);
        }
    } else {
        let table = Table::new(rows, column_constraints())
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(block);
        frame.render_widget(table, area);
    }

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if view.filtered_count() > 0 {
        regions.push(ClickRegion::new(
            Rect::new(inner.x, inner.y, CHECKBOX_COLUMN_WIDTH.min(inner.width), 1),
            ClickTarget::SelectAll,
        ));
    }

    let row_capacity = usize::from(inner.height.saturating_sub(1));
    for index in 0..visible.len().min(row_capacity) {
        let y = inner.y + 1 + index as u16;
        regions.push(ClickRegion::new(
            Rect::new(inner.x, y, inner.width, 1),
            ClickTarget::Row(index),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Roster;
    use crate::source::demo_records;
    use crate::state::{PageSize, ViewState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn demo_state(page_size: usize) -> AppState {
        let roster = Roster::new(demo_records()).unwrap();
        AppState::new(ViewState::new(roster, PageSize::new(page_size).unwrap()))
    }

    fn render(state: &AppState) -> (Vec<String>, Vec<ClickRegion>) {
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        let palette = Palette::default();
        let mut regions = Vec::new();
        terminal
            .draw(|frame| render_table(frame, frame.area(), state, &palette, &mut regions))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let lines = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect();
        (lines, regions)
    }

    #[test]
    fn renders_header_and_visible_page() {
        let state = demo_state(5);
        let (lines, _) = render(&state);

        assert!(lines[0].contains("Records 1-5 of 20"));
        assert!(lines[1].contains("[ ]"));
        assert!(lines[1].contains("NAME"));
        assert!(lines[1].contains("COURSE"));
        assert!(lines[2].contains("John Doe"));
        assert!(lines[6].contains("Charlie Davis"));
    }

    #[test]
    fn selected_rows_and_header_show_checked_boxes() {
        let mut state = demo_state(5);
        state.view.set_search_text("john");
        state.view.toggle_all();

        let (lines, _) = render(&state);

        assert!(lines[1].contains("[x]"), "Header reflects select-all");
        assert!(lines[2].contains("[x]") && lines[2].contains("John Doe"));
        assert!(lines[3].contains("[x]") && lines[3].contains("Alice Johnson"));
    }

    #[test]
    fn empty_filter_shows_message_and_unchecked_header() {
        let mut state = demo_state(5);
        state.view.set_search_text("zzz");

        let (lines, regions) = render(&state);

        assert!(lines.iter().any(|l| l.contains("No records match the search")));
        assert!(regions.is_empty(), "Nothing to click");
    }

    #[test]
    fn records_row_and_select_all_regions() {
        let state = demo_state(5);
        let (_, regions) = render(&state);

        assert_eq!(regions[0].target, ClickTarget::SelectAll);
        assert_eq!(regions[0].area, Rect::new(1, 1, CHECKBOX_COLUMN_WIDTH, 1));
        let rows: Vec<ClickTarget> = regions[1..].iter().map(|r| r.target).collect();
        assert_eq!(
            rows,
            (0..5).map(ClickTarget::Row).collect::<Vec<_>>()
        );
        assert_eq!(regions[1].area.y, 2);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("John Doe", 10), "John Doe");
        assert_eq!(truncate_to_width("John Doe", 8), "John Doe");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Alice Johnson", 8), "Alice J…");
    }

    #[test]
    fn truncate_respects_wide_characters() {
        // Each CJK character is two columns wide
        let cut = truncate_to_width("山田太郎", 5);
        assert_eq!(cut, "山田…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn truncate_to_zero_width_is_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
