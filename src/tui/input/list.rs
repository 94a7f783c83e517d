use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::SortColumn;

use crate::tui::app::{App, Mode};
use crate::tui::view::HeaderField;

use super::*;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    let len = app.view().rows.len();
    let cursor = app.item_cursor;
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => {
            let result = app.controller.go_home();
            if settle(app, result).is_some() {
                app.home_cursor = 0;
            }
        }

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            if cursor + 1 < len {
                app.item_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.item_cursor = cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.item_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.item_cursor = len.saturating_sub(1),

        // Items
        KeyCode::Enter | KeyCode::Char('e') => {
            if len > 0 {
                let result = app.controller.edit_item(cursor);
                settle(app, result);
            }
        }
        KeyCode::Char('a') => {
            let result = app.controller.create_new_item();
            settle(app, result);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if len > 0 {
                let result = app.controller.delete_item(cursor);
                settle(app, result);
                app.clamp_cursors();
            }
        }
        KeyCode::Char('K') => {
            if len > 0 {
                let result = app.controller.move_item_up(cursor);
                if settle(app, result).is_some() {
                    app.item_cursor = cursor - 1;
                }
            }
        }
        KeyCode::Char('J') => {
            if len > 0 {
                let result = app.controller.move_item_down(cursor);
                if settle(app, result).is_some() {
                    app.item_cursor = cursor + 1;
                }
            }
        }

        // Sort headers
        KeyCode::Char('1') => click_header(app, SortColumn::Task),
        KeyCode::Char('2') => click_header(app, SortColumn::DueDate),
        KeyCode::Char('3') => click_header(app, SortColumn::Status),

        // List header and deletion
        KeyCode::Char('r') => app.mode = Mode::EditHeader(HeaderField::Name),
        KeyCode::Char('o') => app.mode = Mode::EditHeader(HeaderField::Owner),
        KeyCode::Char('D') => {
            let result = app.controller.request_delete_list();
            settle(app, result);
        }
        _ => {}
    }
}

fn click_header(app: &mut App, column: SortColumn) {
    let result = app.controller.click_sort_header(column);
    settle(app, result);
}
