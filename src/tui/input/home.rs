use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::*;

pub(super) fn handle_home(app: &mut App, key: KeyEvent) {
    let count = app.view().links.len();
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.home_cursor + 1 < count {
                app.home_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.home_cursor = app.home_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.home_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.home_cursor = count.saturating_sub(1),
        KeyCode::Char('n') => {
            let result = app.controller.create_new_list();
            if settle(app, result).is_some() {
                app.home_cursor = 0;
                app.item_cursor = 0;
            }
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            let Some(id) = app.view().links.get(app.home_cursor).map(|link| link.id) else {
                return;
            };
            let result = app.controller.open_list(id);
            if settle(app, result).is_some() {
                app.home_cursor = 0;
                app.item_cursor = 0;
            }
        }
        _ => {}
    }
}
