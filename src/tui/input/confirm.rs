use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::*;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let result = app.controller.confirm_delete();
            if let Some(removed) = settle(app, result) {
                if let Some(list) = removed {
                    app.status_message = Some(format!("Deleted \"{}\"", list.name));
                }
                app.schedule_home(Instant::now());
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            let result = app.controller.cancel_delete();
            settle(app, result);
        }
        _ => {}
    }
}
