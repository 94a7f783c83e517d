use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::SessionError;
use crate::util::unicode;

use crate::tui::app::{App, Mode};
use crate::tui::view::HeaderField;

/// Report the error of a failed action, if any
pub(super) fn settle<T>(app: &mut App, result: Result<T, SessionError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            app.report(e);
            None
        }
    }
}

/// Apply a single-line text editing key to `buf`.
/// Returns true when the buffer changed.
pub(super) fn edit_text(buf: &mut String, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            if buf.is_empty() {
                return false;
            }
            buf.clear();
            true
        }
        (_, KeyCode::Backspace) => {
            let before = buf.len();
            unicode::pop_grapheme(buf);
            buf.len() != before
        }
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buf.push(c);
            true
        }
        _ => false,
    }
}

pub(super) fn handle_help(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
    ) {
        app.show_help = false;
    }
}

/// Typing into the list name or owner. Every change is pushed to the
/// controller so the home links track the field as it is edited.
pub(super) fn handle_header_edit(app: &mut App, key: KeyEvent, field: HeaderField) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
            app.mode = Mode::Navigate;
        }
        _ => {
            let changed = edit_text(app.controller.view_mut().header_text_mut(field), key);
            if changed {
                let text = app.view().header_text(field).to_string();
                let result = match field {
                    HeaderField::Name => app.controller.update_list_name(&text),
                    HeaderField::Owner => app.controller.update_list_owner(&text),
                };
                settle(app, result);
            }
        }
    }
}
