use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::Screen;
use crate::tui::app::{App, Mode};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.popup_bg;
    let text_color = app.theme.text;
    let bright = app.theme.text_bright;
    let highlight = app.theme.highlight;
    let dim = app.theme.dim;

    let key_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(text_color).bg(bg);
    let header_style = Style::default()
        .fg(bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    match app.screen() {
        Screen::Home => {
            lines.push(Line::from(Span::styled(" Lists", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Open list", key_style, desc_style);
            add_binding(&mut lines, " n", "New list", key_style, desc_style);
        }
        Screen::ListDetail => {
            lines.push(Line::from(Span::styled(" Items", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter/e", "Edit item", key_style, desc_style);
            add_binding(&mut lines, " a", "Add item", key_style, desc_style);
            add_binding(&mut lines, " x", "Delete item", key_style, desc_style);
            add_binding(&mut lines, " K/J", "Move item up/down", key_style, desc_style);
            add_binding(
                &mut lines,
                " 1/2/3",
                "Sort by task/due date/status",
                key_style,
                desc_style,
            );
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" List", header_style)));
            add_binding(&mut lines, " r", "Rename list", key_style, desc_style);
            add_binding(&mut lines, " o", "Change owner", key_style, desc_style);
            add_binding(&mut lines, " D", "Delete list", key_style, desc_style);
            add_binding(&mut lines, " Esc/h", "Back to lists", key_style, desc_style);
        }
        Screen::ItemEdit => {
            lines.push(Line::from(Span::styled(" Item", header_style)));
            add_binding(&mut lines, " Tab/\u{2193}", "Next field", key_style, desc_style);
            add_binding(&mut lines, " S-Tab/\u{2191}", "Previous field", key_style, desc_style);
            add_binding(&mut lines, " Space", "Toggle completed", key_style, desc_style);
            add_binding(&mut lines, " Ctrl+U", "Clear field", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Save item", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Cancel", key_style, desc_style);
        }
    }
    lines.push(Line::from(""));

    // ? and q are plain text while a field takes input
    lines.push(Line::from(Span::styled(" Global", header_style)));
    if accepts_commands(app) {
        add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
        add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    }
    add_binding(&mut lines, " Ctrl+C", "Quit (anywhere)", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn accepts_commands(app: &App) -> bool {
    app.mode == Mode::Navigate && app.screen() != Screen::ItemEdit
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
