use crate::model::item::Item;
use crate::model::list::TodoList;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The list of lists
    #[default]
    Home,
    /// One list's header and item table
    ListDetail,
    /// The item form
    ItemEdit,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Home => write!(f, "home"),
            Screen::ListDetail => write!(f, "list"),
            Screen::ItemEdit => write!(f, "item edit"),
        }
    }
}

/// Rendering collaborator driven by the controller.
///
/// The controller never reads anything back from the view; it only tells it
/// which regions changed.
pub trait ViewAdapter {
    /// Show exactly one screen
    fn render(&mut self, screen: Screen);
    /// Redraw the home screen's links, in store order
    fn render_list_links(&mut self, lists: &[TodoList]);
    /// Redraw the item table of `list`
    fn render_items(&mut self, list: &TodoList);
    /// Redraw the list screen header and its items
    fn render_list_detail(&mut self, list: &TodoList);
    fn show_confirm_dialog(&mut self);
    fn hide_confirm_dialog(&mut self);
    /// Fill the item form from an existing item
    fn populate_item_form(&mut self, item: &Item);
    /// Reset the item form to its blank "Unknown" state
    fn clear_item_form(&mut self);
}
