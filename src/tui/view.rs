use crate::model::item::{Item, ItemFields};
use crate::model::list::{ListId, TodoList};
use crate::ops::view::{Screen, ViewAdapter};

/// One entry in the home screen's list of lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLink {
    pub id: ListId,
    pub name: String,
    pub owner: String,
    pub item_count: usize,
}

/// One row of the item table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub description: String,
    pub assigned_to: String,
    pub due_date: String,
    pub completed: bool,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        ItemRow {
            description: item.description.clone(),
            assigned_to: item.assigned_to.clone(),
            due_date: item.due_date.clone(),
            completed: item.completed,
        }
    }
}

/// Editable text fields in the list screen header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Name,
    Owner,
}

/// Fields of the item form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    AssignedTo,
    DueDate,
    Completed,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Description,
        FormField::AssignedTo,
        FormField::DueDate,
        FormField::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Description => "Description",
            FormField::AssignedTo => "Assigned To",
            FormField::DueDate => "Due Date",
            FormField::Completed => "Completed",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Description => FormField::AssignedTo,
            FormField::AssignedTo => FormField::DueDate,
            FormField::DueDate => FormField::Completed,
            FormField::Completed => FormField::Description,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Description => FormField::Completed,
            FormField::AssignedTo => FormField::Description,
            FormField::DueDate => FormField::AssignedTo,
            FormField::Completed => FormField::DueDate,
        }
    }
}

/// The item form: current values plus which field has focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub fields: ItemFields,
    pub focus: FormField,
}

impl ItemForm {
    /// The focused text field, or None when the checkbox has focus
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Description => Some(&mut self.fields.description),
            FormField::AssignedTo => Some(&mut self.fields.assigned_to),
            FormField::DueDate => Some(&mut self.fields.due_date),
            FormField::Completed => None,
        }
    }

    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Description => Some(&self.fields.description),
            FormField::AssignedTo => Some(&self.fields.assigned_to),
            FormField::DueDate => Some(&self.fields.due_date),
            FormField::Completed => None,
        }
    }
}

/// Retained display model the renderer draws every frame.
///
/// The controller updates it through [`ViewAdapter`]; the header text fields
/// and the item form are also written directly by input handlers, the way
/// the user types into form controls.
#[derive(Debug, Default)]
pub struct TuiView {
    pub screen: Screen,
    pub links: Vec<ListLink>,
    pub list_id: Option<ListId>,
    pub list_name: String,
    pub list_owner: String,
    pub rows: Vec<ItemRow>,
    pub confirm_visible: bool,
    pub form: ItemForm,
}

impl TuiView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_text(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::Name => &self.list_name,
            HeaderField::Owner => &self.list_owner,
        }
    }

    pub fn header_text_mut(&mut self, field: HeaderField) -> &mut String {
        match field {
            HeaderField::Name => &mut self.list_name,
            HeaderField::Owner => &mut self.list_owner,
        }
    }
}

impl ViewAdapter for TuiView {
    fn render(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn render_list_links(&mut self, lists: &[TodoList]) {
        self.links = lists
            .iter()
            .map(|list| ListLink {
                id: list.id(),
                name: list.name.clone(),
                owner: list.owner.clone(),
                item_count: list.len(),
            })
            .collect();
    }

    fn render_items(&mut self, list: &TodoList) {
        self.rows = list.items().iter().map(ItemRow::from).collect();
    }

    fn render_list_detail(&mut self, list: &TodoList) {
        self.list_id = Some(list.id());
        self.list_name = list.name.clone();
        self.list_owner = list.owner.clone();
        self.render_items(list);
    }

    fn show_confirm_dialog(&mut self) {
        self.confirm_visible = true;
    }

    fn hide_confirm_dialog(&mut self) {
        self.confirm_visible = false;
    }

    fn populate_item_form(&mut self, item: &Item) {
        self.form = ItemForm {
            fields: item.fields(),
            focus: FormField::Description,
        };
    }

    fn clear_item_form(&mut self) {
        self.form = ItemForm::default();
    }
}
