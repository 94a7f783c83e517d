use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

/// Render the delete-list confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    if !app.view().confirm_visible {
        return;
    }

    let bg = app.theme.popup_bg;
    let text_color = app.theme.text;
    let bright = app.theme.text_bright;
    let dim = app.theme.dim;
    let highlight = app.theme.highlight;

    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(text_color).bg(bg);
    let bright_style = Style::default()
        .fg(bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let warn_style = Style::default().fg(app.theme.red).bg(bg);
    let dim_style = Style::default().fg(dim).bg(bg);

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let name_room = (popup_w as usize).saturating_sub(16);
    let name = unicode::truncate_to_width(&app.view().list_name, name_room);
    let count = app.view().rows.len();

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Delete List", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  Delete ", text_style),
            Span::styled(format!("\"{}\"", name), bright_style),
            Span::styled("?", text_style),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} item{} will be removed.",
                count,
                if count == 1 { "" } else { "s" }
            ),
            text_style,
        )),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled("  This cannot be undone.", warn_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("y", dim_style),
            Span::styled(" delete  ", text_style),
            Span::styled("n", dim_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
