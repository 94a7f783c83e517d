pub mod confirm_popup;
pub mod header_bar;
pub mod help_overlay;
pub mod home_view;
pub mod item_form;
pub mod list_view;
pub mod status_row;

mod helpers;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::ops::Screen;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header_bar::render_header_bar(frame, app, chunks[0]);

    match app.screen() {
        Screen::Home => home_view::render_home_view(frame, app, chunks[1]),
        Screen::ListDetail => list_view::render_list_view(frame, app, chunks[1]),
        Screen::ItemEdit => item_form::render_item_form(frame, app, chunks[1]),
    }

    // Popups (rendered on top of everything)
    confirm_popup::render_confirm_popup(frame, app, area);
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
