use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{scroll_offset, spans_width};

/// Render the home screen: one row per list, most recently opened first
pub fn render_home_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let links = &app.view().links;

    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(" Your Lists", header_style),
            Span::styled(format!("  ({})", links.len()), dim_style),
        ]),
        Line::from(""),
    ];

    if links.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No lists yet. Press n to create one.",
            dim_style,
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    let name_w = links
        .iter()
        .map(|l| unicode::display_width(&l.name))
        .max()
        .unwrap_or(0)
        .clamp(4, (width / 2).max(4));
    let owner_w = links
        .iter()
        .map(|l| unicode::display_width(&l.owner))
        .max()
        .unwrap_or(0)
        .clamp(5, 20);

    let visible = (area.height as usize).saturating_sub(lines.len());
    let offset = scroll_offset(app.home_cursor, visible);

    for (i, link) in links.iter().enumerate().skip(offset).take(visible) {
        let selected = i == app.home_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let marker = if selected { " \u{25B8} " } else { "   " };
        let name_style = if selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        let count = if link.item_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", link.item_count)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(unicode::fit_to_width(&link.name, name_w), name_style),
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(
                unicode::fit_to_width(&link.owner, owner_w),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(count, Style::default().fg(app.theme.dim).bg(row_bg)),
        ];
        let used = spans_width(&spans);
        if selected && used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
