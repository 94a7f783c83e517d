use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::Screen;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the title line with the breadcrumb trail, plus a separator row
pub fn render_header_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let view = app.view();

    let title_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let crumb_style = Style::default().fg(app.theme.text).bg(bg);
    let current_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let sep_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut crumbs: Vec<&str> = vec!["Lists"];
    match view.screen {
        Screen::Home => {}
        Screen::ListDetail => crumbs.push(&view.list_name),
        Screen::ItemEdit => {
            crumbs.push(&view.list_name);
            crumbs.push("Item");
        }
    }

    let mut spans = vec![Span::styled(" [x] todo  ", title_style)];
    let last = crumbs.len() - 1;
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{203A} ", sep_style));
        }
        let style = if i == last { current_style } else { crumb_style };
        spans.push(Span::styled(unicode::truncate_to_width(crumb, 30), style));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled("\u{2500}".repeat(width), sep_style)),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
