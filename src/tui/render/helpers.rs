use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::ops::{SortColumn, SortCriterion, SortDirection};
use crate::util::unicode;

/// Arrow shown after a column header when the list is sorted by it
pub(super) fn sort_indicator(sort: Option<SortCriterion>, column: SortColumn) -> &'static str {
    match sort {
        Some(c) if c.column == column => match c.direction {
            SortDirection::Increasing => " \u{25B2}",
            SortDirection::Decreasing => " \u{25BC}",
        },
        _ => "",
    }
}

pub(super) fn status_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Pending" }
}

pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// First row to draw so that `cursor` stays inside `visible` rows
pub(super) fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible - 1)
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
