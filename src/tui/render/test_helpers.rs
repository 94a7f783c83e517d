use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Item, Store, TodoList};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An item with every field set
pub fn item(description: &str, assigned_to: &str, due_date: &str, completed: bool) -> Item {
    let mut item = Item::new();
    item.description = description.into();
    item.assigned_to = assigned_to.into();
    item.due_date = due_date.into();
    item.completed = completed;
    item
}

/// Two lists: "Groceries" with three items and an empty "Chores"
pub fn sample_lists() -> Vec<TodoList> {
    let mut groceries = TodoList::with_name("Groceries", "Sam");
    groceries.add_item(item("Milk", "Sam", "2024-05-02", false));
    groceries.add_item(item("Bread", "Alex", "2024-05-01", true));
    groceries.add_item(item("Eggs", "Sam", "soon", false));
    let chores = TodoList::with_name("Chores", "Alex");
    vec![groceries, chores]
}

pub fn app_with_lists(lists: Vec<TodoList>) -> App {
    let store: Store = lists.into_iter().collect();
    App::new(store, &AppConfig::default())
}

/// An App showing the first sample list
pub fn app_on_list_screen() -> App {
    let mut app = app_with_lists(sample_lists());
    let id = app.view().links[0].id;
    app.controller.open_list(id).unwrap();
    app
}
