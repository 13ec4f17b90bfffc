//! Pager row: previous control, page numbers with gaps, next control and a
//! "Page X of Y" summary.

use crate::state::{ClickRegion, ClickTarget};
use crate::view::constants::MAX_PAGE_LINKS;
use crate::view::styles::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PREV_LABEL: &str = "‹ Prev";
const NEXT_LABEL: &str = "Next ›";
const GAP_LABEL: &str = "…";
const SEPARATOR: &str = " ";

/// One control in the pager row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    /// Go to the previous page.
    Prev,
    /// Go to a 1-based page.
    Page(usize),
    /// Collapsed run of pages.
    Gap,
    /// Go to the next page.
    Next,
}

/// Controls to show for `current` of `total` pages.
///
/// Small page counts list every page. Larger ones keep the first and last
/// page plus the neighbours of `current`, collapsing the rest into gaps.
pub fn pager_items(current: usize, total: usize) -> Vec<PagerItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut items = vec![PagerItem::Prev];
    if total <= MAX_PAGE_LINKS {
        items.extend((1..=total).map(PagerItem::Page));
    } else {
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);

        items.push(PagerItem::Page(1));
        if start > 2 {
            items.push(PagerItem::Gap);
        }
        items.extend((start..=end).map(PagerItem::Page));
        if end < total - 1 {
            items.push(PagerItem::Gap);
        }
        items.push(PagerItem::Page(total));
    }
    items.push(PagerItem::Next);
    items
}

fn label(item: PagerItem) -> String {
    match item {
        PagerItem::Prev => PREV_LABEL.to_string(),
        PagerItem::Page(page) => format!(" {} ", page),
        PagerItem::Gap => GAP_LABEL.to_string(),
        PagerItem::Next => NEXT_LABEL.to_string(),
    }
}

/// Render the pager into the single-line `area` and record its clickable
/// controls.
pub fn render_pager(
    frame: &mut Frame,
    area: Rect,
    current: usize,
    total: usize,
    palette: &Palette,
    regions: &mut Vec<ClickRegion>,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let mut spans = Vec::new();
    let mut x = area.x;
    let right = area.x + area.width;

    for item in pager_items(current, total) {
        let text = label(item);
        let width = text.width() as u16;

        let (style, target) = match item {
            PagerItem::Prev if current > 1 => (Style::new(), Some(ClickTarget::PrevPage)),
            PagerItem::Next if current < total => (Style::new(), Some(ClickTarget::NextPage)),
            PagerItem::Prev | PagerItem::Next => (palette.disabled, None),
            PagerItem::Page(page) if page == current => (palette.active_page, None),
            PagerItem::Page(page) => (Style::new(), Some(ClickTarget::Page(page))),
            PagerItem::Gap => (palette.muted, None),
        };

        if let Some(target) = target {
            let visible = width.min(right.saturating_sub(x));
            if visible > 0 {
                regions.push(ClickRegion::new(Rect::new(x, area.y, visible, 1), target));
            }
        }

        spans.push(Span::styled(text, style));
        spans.push(Span::raw(SEPARATOR));
        x = x.saturating_add(width + SEPARATOR.width() as u16);
    }

    spans.push(Span::styled(
        format!(" Page {} of {}", current, total.max(1)),
        palette.muted,
    ));

    frame.render_widget(Line::from(spans), area);
}
