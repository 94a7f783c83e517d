use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::SortColumn;
use crate::tui::app::{App, Mode};
use crate::tui::view::HeaderField;
use crate::util::unicode;

use super::helpers::{scroll_offset, sort_indicator, spans_width, status_label};

const ASSIGNED_W: usize = 14;
const DUE_W: usize = 12;
const STATUS_W: usize = 11;
const GAP: usize = 2;
const MARKER_W: usize = 3;

/// Widths of the item table columns for a given area width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    task: usize,
    assigned: usize,
    due: usize,
    status: usize,
}

impl Columns {
    fn for_width(width: usize) -> Self {
        let fixed = MARKER_W + ASSIGNED_W + DUE_W + STATUS_W + GAP * 3;
        Columns {
            task: width.saturating_sub(fixed).max(8),
            assigned: ASSIGNED_W,
            due: DUE_W,
            status: STATUS_W,
        }
    }
}

/// Render the list screen: editable name/owner header plus the item table
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let view = app.view();
    let sort = app.controller.nav().sort;
    let cols = Columns::for_width(width);

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    for field in [HeaderField::Name, HeaderField::Owner] {
        let label = match field {
            HeaderField::Name => " Name   ",
            HeaderField::Owner => " Owner  ",
        };
        let editing = app.mode == Mode::EditHeader(field);
        let mut spans = vec![Span::styled(label, dim_style)];
        if editing {
            spans.push(Span::styled(
                view.header_text(field).to_string(),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        } else {
            let style = if field == HeaderField::Name { header_style } else { text_style };
            spans.push(Span::styled(view.header_text(field).to_string(), style));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    // Column headers carry their sort key and the active sort arrow
    let heading = |key: &str, title: &str, column: Option<SortColumn>, w: usize| {
        let text = match column {
            Some(c) => format!("{key}{title}{}", sort_indicator(sort, c)),
            None => title.to_string(),
        };
        unicode::fit_to_width(&text, w)
    };
    let gap = " ".repeat(GAP);
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(MARKER_W), header_style),
        Span::styled(heading("1 ", "Task", Some(SortColumn::Task), cols.task), header_style),
        Span::styled(gap.clone(), header_style),
        Span::styled(heading("", "Assigned To", None, cols.assigned), header_style),
        Span::styled(gap.clone(), header_style),
        Span::styled(heading("2 ", "Due Date", Some(SortColumn::DueDate), cols.due), header_style),
        Span::styled(gap.clone(), header_style),
        Span::styled(heading("3 ", "Status", Some(SortColumn::Status), cols.status), header_style),
    ]));
    lines.push(Line::from(Span::styled("\u{2500}".repeat(width), dim_style)));

    if view.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "   No items. Press a to add one.",
            dim_style,
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    let visible = (area.height as usize).saturating_sub(lines.len());
    let offset = scroll_offset(app.item_cursor, visible);

    for (i, row) in view.rows.iter().enumerate().skip(offset).take(visible) {
        let selected = i == app.item_cursor && app.mode == Mode::Navigate;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let cell = Style::default().fg(app.theme.text).bg(row_bg);
        let task_style = if selected {
            cell.fg(app.theme.text_bright).add_modifier(Modifier::BOLD)
        } else if row.completed {
            cell.fg(app.theme.dim)
        } else {
            cell
        };
        let marker = if selected { " \u{25B8} " } else { "   " };
        let gap = Span::styled(" ".repeat(GAP), Style::default().bg(row_bg));

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(unicode::fit_to_width(&row.description, cols.task), task_style),
            gap.clone(),
            Span::styled(unicode::fit_to_width(&row.assigned_to, cols.assigned), cell),
            gap.clone(),
            Span::styled(unicode::fit_to_width(&row.due_date, cols.due), cell),
            gap,
            Span::styled(
                unicode::fit_to_width(status_label(row.completed), cols.status),
                cell.fg(app.theme.status_color(row.completed)),
            ),
        ];
        let used = spans_width(&spans);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
