use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::view::FormField;

use super::*;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let result = app.controller.cancel_item();
            if settle(app, result).is_some() {
                app.clamp_cursors();
            }
        }
        KeyCode::Enter => {
            let was_new = app.controller.nav().is_new_item_edit;
            let fields = app.view().form.fields.clone();
            let result = app.controller.submit_item(fields);
            if settle(app, result).is_some() && was_new {
                app.item_cursor = app.view().rows.len().saturating_sub(1);
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            let form = &mut app.controller.view_mut().form;
            form.focus = form.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            let form = &mut app.controller.view_mut().form;
            form.focus = form.focus.prev();
        }
        _ => {
            let form = &mut app.controller.view_mut().form;
            if form.focus == FormField::Completed {
                if key.code == KeyCode::Char(' ') && key.modifiers == KeyModifiers::NONE {
                    form.fields.completed = !form.fields.completed;
                }
            } else if let Some(buf) = form.focused_text_mut() {
                edit_text(buf, key);
            }
        }
    }
}
