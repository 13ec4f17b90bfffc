//! Search bar widget.

use crate::state::SearchInput;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar showing the query, a cursor block while focused, and the
/// number of matching records in the title.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    focused: bool,
    matched: usize,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    /// Create the widget.
    pub fn new(input: &'a SearchInput, focused: bool, matched: usize, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            matched,
            palette,
        }
    }

    fn query_line(&self) -> Line<'a> {
        if !self.focused {
            return Line::from(self.input.text());
        }

        let text = self.input.text();
        let cursor = self.input.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, Style::new().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Search by name ({} matching) ", self.matched);
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if self.focused {
            block = block.border_style(self.palette.focused_border);
        }

        Paragraph::new(self.query_line()).block(block).render(area, buf);
    }
}
