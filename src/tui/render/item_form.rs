use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::view::FormField;
use crate::util::unicode;

use super::helpers::{checkbox, spans_width};

const LABEL_W: usize = 14;

/// Render the item form, one row per field
pub fn render_item_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let form = &app.view().form;

    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let title = if app.controller.nav().is_new_item_edit {
        " New Item"
    } else {
        " Edit Item"
    };
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(title, header_style)), Line::from("")];

    for field in FormField::ALL {
        let focused = form.focus == field;
        let row_bg = if focused { app.theme.selection_bg } else { bg };
        let label_style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let value_style = Style::default()
            .fg(if focused { app.theme.text_bright } else { app.theme.text })
            .bg(row_bg);

        let mut spans = vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(unicode::fit_to_width(field.label(), LABEL_W), label_style),
        ];
        match form.text(field) {
            Some(text) => {
                let room = width.saturating_sub(LABEL_W + 3);
                spans.push(Span::styled(unicode::truncate_to_width(text, room), value_style));
                if focused {
                    spans.push(Span::styled(
                        "\u{258C}",
                        Style::default().fg(app.theme.highlight).bg(row_bg),
                    ));
                }
            }
            None => {
                let completed = form.fields.completed;
                spans.push(Span::styled(
                    checkbox(completed),
                    Style::default()
                        .fg(app.theme.status_color(completed))
                        .bg(row_bg),
                ));
            }
        }
        let used = spans_width(&spans);
        if focused && used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Due dates in YYYY-MM-DD form sort by date; anything else sorts after them.",
        dim_style,
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
