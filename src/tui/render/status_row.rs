use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::Screen;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::spans_width;

/// Whether the selected row can move (up, down)
fn move_available(app: &App) -> (bool, bool) {
    let len = app.view().rows.len();
    let cursor = app.item_cursor;
    (len > 0 && cursor > 0, cursor + 1 < len)
}

/// Key hints for whatever currently receives input. Unavailable moves fade.
fn hint_spans(app: &App) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let faded = Style::default().fg(app.theme.faded).bg(bg);

    let text = if app.pending_home.is_some() {
        return Vec::new();
    } else if app.show_help {
        "? close"
    } else if app.view().confirm_visible {
        "y delete  n cancel"
    } else if let Mode::EditHeader(_) = app.mode {
        "type to edit  Ctrl+U clear  Enter done"
    } else {
        match app.screen() {
            Screen::Home => "n new  Enter open  ? help  q quit",
            Screen::ItemEdit => "Tab next  Space toggle  Enter save  Esc cancel",
            Screen::ListDetail => {
                let (up, down) = move_available(app);
                return vec![
                    Span::styled("a add  e edit  x del  ", dim),
                    Span::styled("K up", if up { dim } else { faded }),
                    Span::styled("  ", dim),
                    Span::styled("J down", if down { dim } else { faded }),
                    Span::styled("  1-3 sort  D delete list  Esc back ", dim),
                ];
            }
        }
    };
    vec![Span::styled(format!("{} ", text), dim)]
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }

    let hint = if app.show_key_hints { hint_spans(app) } else { Vec::new() };
    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let hint_width = spans_width(&hint);
    if hint_width > 0 && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.extend(hint);
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
