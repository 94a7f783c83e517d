use tracing::{debug, info, warn};

use crate::model::item::{Item, ItemFields, ItemId};
use crate::model::list::{ListError, ListId, TodoList};
use crate::model::store::Store;

use super::sort::{self, SortColumn, SortCriterion};
use super::view::{Screen, ViewAdapter};

/// Error type for user actions routed through the controller
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {action} from the {screen} screen")]
    InvalidTransition {
        screen: Screen,
        action: &'static str,
    },
    #[error("no list named {0:?}")]
    ListNotFound(String),
    #[error("list {0:?} is not in the store")]
    UnknownList(ListId),
    #[error("no list is open")]
    NoListOpen,
    #[error("no item is being edited")]
    NoItemOpen,
    #[error(transparent)]
    List(#[from] ListError),
}

/// Which screen is active and what is being edited on it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub screen: Screen,
    /// Set only on the list and item-edit screens
    pub list_being_edited: Option<ListId>,
    /// Set only on the item-edit screen
    pub item_being_edited: Option<ItemId>,
    /// The edited item was created by "new item" and not yet submitted
    pub is_new_item_edit: bool,
    pub sort: Option<SortCriterion>,
    /// Delete-list confirmation is showing (list screen only)
    pub confirm_visible: bool,
}

/// Owns all session state and applies user actions to it.
///
/// Built once at startup; every input handler goes through it. After each
/// mutation it tells the view which regions to redraw.
pub struct Controller<V: ViewAdapter> {
    store: Store,
    nav: NavState,
    view: V,
}

impl<V: ViewAdapter> Controller<V> {
    pub fn new(store: Store, mut view: V) -> Self {
        view.render_list_links(store.lists());
        view.render(Screen::Home);
        Controller {
            store,
            nav: NavState::default(),
            view,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The list open on the list or item-edit screen
    pub fn current_list(&self) -> Option<&TodoList> {
        self.store.get(self.nav.list_being_edited?)
    }

    /// The item open on the item-edit screen
    pub fn current_item(&self) -> Option<&Item> {
        let list = self.current_list()?;
        let index = list.index_of(self.nav.item_being_edited?)?;
        list.item_at(index)
    }

    /// Add a list at the end of the store (startup loading)
    pub fn append_list(&mut self, list: TodoList) {
        self.store.append(list);
        self.view.render_list_links(self.store.lists());
    }

    // -----------------------------------------------------------------------
    // Home screen
    // -----------------------------------------------------------------------

    /// Create an empty list at the top of the store and open it
    pub fn create_new_list(&mut self) -> Result<ListId, SessionError> {
        self.require_screen(Screen::Home, "create a list")?;
        let list = TodoList::new();
        let id = list.id();
        self.store.prepend(list);
        self.view.render_list_links(self.store.lists());
        self.enter_list(id);
        info!(list = ?id, "created list");
        Ok(id)
    }

    /// Open the first list with this name
    pub fn select_list(&mut self, name: &str) -> Result<ListId, SessionError> {
        self.require_screen(Screen::Home, "open a list")?;
        let id = self
            .store
            .find_by_name(name)
            .map(|l| l.id())
            .ok_or_else(|| SessionError::ListNotFound(name.to_string()))?;
        self.open_list(id)?;
        Ok(id)
    }

    /// Open a list by identity, moving it to the top of the store
    pub fn open_list(&mut self, id: ListId) -> Result<(), SessionError> {
        self.require_screen(Screen::Home, "open a list")?;
        if !self.store.move_to_top(id) {
            return Err(SessionError::UnknownList(id));
        }
        self.view.render_list_links(self.store.lists());
        self.enter_list(id);
        Ok(())
    }

    fn enter_list(&mut self, id: ListId) {
        self.nav.screen = Screen::ListDetail;
        self.nav.list_being_edited = Some(id);
        self.nav.item_being_edited = None;
        self.nav.is_new_item_edit = false;
        if let Some(list) = self.store.get(id) {
            self.view.render_list_detail(list);
        }
        self.view.render(Screen::ListDetail);
        debug!(list = ?id, "entered list screen");
    }

    // -----------------------------------------------------------------------
    // List screen
    // -----------------------------------------------------------------------

    pub fn go_home(&mut self) -> Result<(), SessionError> {
        self.require_screen(Screen::ListDetail, "go home")?;
        self.nav.screen = Screen::Home;
        self.nav.list_being_edited = None;
        self.view.render_list_links(self.store.lists());
        self.view.render(Screen::Home);
        debug!("returned home");
        Ok(())
    }

    /// Rename the open list. The home links are redrawn only on a real change.
    pub fn update_list_name(&mut self, new_name: &str) -> Result<bool, SessionError> {
        self.update_list_text(new_name, |list| &mut list.name)
    }

    /// Change the owner of the open list. The home links are redrawn only on a real change.
    pub fn update_list_owner(&mut self, new_owner: &str) -> Result<bool, SessionError> {
        self.update_list_text(new_owner, |list| &mut list.owner)
    }

    fn update_list_text(
        &mut self,
        value: &str,
        field: impl FnOnce(&mut TodoList) -> &mut String,
    ) -> Result<bool, SessionError> {
        self.require_screen(Screen::ListDetail, "edit the list")?;
        let list = self.open_list_mut()?;
        let slot = field(list);
        if slot.as_str() == value {
            return Ok(false);
        }
        *slot = value.to_string();
        self.view.render_list_links(self.store.lists());
        Ok(true)
    }

    pub fn request_delete_list(&mut self) -> Result<(), SessionError> {
        self.require_screen(Screen::ListDetail, "delete the list")?;
        self.nav.confirm_visible = true;
        self.view.show_confirm_dialog();
        Ok(())
    }

    pub fn cancel_delete(&mut self) -> Result<(), SessionError> {
        self.require_dialog("cancel a delete")?;
        self.nav.confirm_visible = false;
        self.view.hide_confirm_dialog();
        Ok(())
    }

    /// Remove the most recently accessed list (the one open, since opening
    /// moves a list to the top). The caller returns home with [`go_home`]
    /// once its transition delay has passed.
    ///
    /// [`go_home`]: Controller::go_home
    pub fn confirm_delete(&mut self) -> Result<Option<TodoList>, SessionError> {
        self.require_dialog("confirm a delete")?;
        let removed = self.store.shift_first();
        if let Some(list) = &removed {
            if Some(list.id()) != self.nav.list_being_edited {
                warn!(removed = ?list.id(), open = ?self.nav.list_being_edited, "deleted list was not the open list");
            }
            info!(list = ?list.id(), name = %list.name, "deleted list");
        }
        self.nav.list_being_edited = None;
        self.nav.confirm_visible = false;
        self.view.render_list_links(self.store.lists());
        self.view.hide_confirm_dialog();
        Ok(removed)
    }

    /// Append a blank item to the open list and edit it
    pub fn create_new_item(&mut self) -> Result<ItemId, SessionError> {
        self.require_screen(Screen::ListDetail, "add an item")?;
        let item = Item::new();
        let id = item.id();
        self.open_list_mut()?.add_item(item);
        self.nav.screen = Screen::ItemEdit;
        self.nav.item_being_edited = Some(id);
        self.nav.is_new_item_edit = true;
        self.view.clear_item_form();
        self.view.render(Screen::ItemEdit);
        debug!(item = ?id, "editing new item");
        Ok(id)
    }

    /// Edit the item at `index` of the open list
    pub fn edit_item(&mut self, index: usize) -> Result<ItemId, SessionError> {
        self.require_screen(Screen::ListDetail, "edit an item")?;
        let list_id = self.nav.list_being_edited.ok_or(SessionError::NoListOpen)?;
        let list = self.store.get(list_id).ok_or(SessionError::NoListOpen)?;
        let item = list.item_at(index).ok_or(ListError::OutOfRange {
            index,
            len: list.len(),
        })?;
        let id = item.id();
        self.view.populate_item_form(item);
        self.nav.screen = Screen::ItemEdit;
        self.nav.item_being_edited = Some(id);
        self.nav.is_new_item_edit = false;
        self.view.render(Screen::ItemEdit);
        debug!(item = ?id, index, "editing item");
        Ok(id)
    }

    pub fn delete_item(&mut self, index: usize) -> Result<Item, SessionError> {
        self.require_screen(Screen::ListDetail, "delete an item")?;
        let removed = self.open_list_mut()?.remove_at(index)?;
        self.refresh_open_list();
        debug!(item = ?removed.id(), index, "deleted item");
        Ok(removed)
    }

    pub fn move_item_up(&mut self, index: usize) -> Result<(), SessionError> {
        self.require_screen(Screen::ListDetail, "move an item")?;
        self.open_list_mut()?.move_up(index)?;
        self.refresh_open_list();
        Ok(())
    }

    pub fn move_item_down(&mut self, index: usize) -> Result<(), SessionError> {
        self.require_screen(Screen::ListDetail, "move an item")?;
        self.open_list_mut()?.move_down(index)?;
        self.refresh_open_list();
        Ok(())
    }

    /// Sort the open list's items and remember the criterion
    pub fn sort_items(&mut self, criterion: SortCriterion) -> Result<(), SessionError> {
        self.require_screen(Screen::ListDetail, "sort items")?;
        sort::sort_items(self.open_list_mut()?, criterion);
        self.nav.sort = Some(criterion);
        if let Some(id) = self.nav.list_being_edited
            && let Some(list) = self.store.get(id)
        {
            self.view.render_items(list);
        }
        debug!(?criterion, "sorted items");
        Ok(())
    }

    /// Header click: toggles direction on the active column, else sorts increasing
    pub fn click_sort_header(&mut self, column: SortColumn) -> Result<SortCriterion, SessionError> {
        let criterion = SortCriterion::after_click(column, self.nav.sort);
        self.sort_items(criterion)?;
        Ok(criterion)
    }

    // -----------------------------------------------------------------------
    // Item edit screen
    // -----------------------------------------------------------------------

    /// Store the form values into the edited item and return to the list
    pub fn submit_item(&mut self, fields: ItemFields) -> Result<(), SessionError> {
        self.require_screen(Screen::ItemEdit, "submit an item")?;
        let item_id = self.nav.item_being_edited.ok_or(SessionError::NoItemOpen)?;
        let item = self
            .open_list_mut()?
            .item_mut(item_id)
            .ok_or(SessionError::NoItemOpen)?;
        item.apply(fields);
        debug!(item = ?item_id, "submitted item");
        self.finish_item_edit();
        Ok(())
    }

    /// Leave the form without saving. A brand-new item is discarded.
    pub fn cancel_item(&mut self) -> Result<Option<Item>, SessionError> {
        self.require_screen(Screen::ItemEdit, "cancel an item edit")?;
        let mut discarded = None;
        if self.nav.is_new_item_edit
            && let Some(item_id) = self.nav.item_being_edited
        {
            discarded = self.open_list_mut()?.remove_item(item_id);
            debug!(item = ?item_id, "discarded new item");
        }
        self.finish_item_edit();
        Ok(discarded)
    }

    fn finish_item_edit(&mut self) {
        self.nav.screen = Screen::ListDetail;
        self.nav.item_being_edited = None;
        self.nav.is_new_item_edit = false;
        self.view.clear_item_form();
        self.refresh_open_list();
        self.view.render(Screen::ListDetail);
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Redraw the open list's items and the home links (which show item counts)
    fn refresh_open_list(&mut self) {
        if let Some(id) = self.nav.list_being_edited
            && let Some(list) = self.store.get(id)
        {
            self.view.render_items(list);
        }
        self.view.render_list_links(self.store.lists());
    }

    fn open_list_mut(&mut self) -> Result<&mut TodoList, SessionError> {
        let id = self.nav.list_being_edited.ok_or(SessionError::NoListOpen)?;
        self.store.get_mut(id).ok_or(SessionError::NoListOpen)
    }

    fn require_screen(&self, screen: Screen, action: &'static str) -> Result<(), SessionError> {
        if self.nav.screen == screen && !self.nav.confirm_visible {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn require_dialog(&self, action: &'static str) -> Result<(), SessionError> {
        if self.nav.screen == Screen::ListDetail && self.nav.confirm_visible {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        warn!(screen = %self.nav.screen, action, "rejected action");
        SessionError::InvalidTransition {
            screen: self.nav.screen,
            action,
        }
    }
}
