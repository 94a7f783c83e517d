use super::list::{ListId, TodoList};

/// Every list known to the session, most recently accessed first
#[derive(Debug, Default)]
pub struct Store {
    lists: Vec<TodoList>,
}

impl Store {
    pub fn new() -> Self {
        Store { lists: Vec::new() }
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn first(&self) -> Option<&TodoList> {
        self.lists.first()
    }

    /// Add a list at the end. A list already in the store is moved, not duplicated.
    pub fn append(&mut self, list: TodoList) {
        self.remove(list.id());
        self.lists.push(list);
    }

    /// Add a list at the front. A list already in the store is moved, not duplicated.
    pub fn prepend(&mut self, list: TodoList) {
        self.remove(list.id());
        self.lists.insert(0, list);
    }

    pub fn remove(&mut self, id: ListId) -> Option<TodoList> {
        let index = self.position(id)?;
        Some(self.lists.remove(index))
    }

    /// Move the list to position 0, keeping the others in order.
    /// Returns false if the list is not in the store.
    pub fn move_to_top(&mut self, id: ListId) -> bool {
        match self.remove(id) {
            Some(list) => {
                self.prepend(list);
                true
            }
            None => false,
        }
    }

    /// Remove and return the first (most recently accessed) list
    pub fn shift_first(&mut self) -> Option<TodoList> {
        if self.lists.is_empty() {
            None
        } else {
            Some(self.lists.remove(0))
        }
    }

    pub fn position(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id() == id)
    }

    pub fn get(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id() == id)
    }

    pub fn get_mut(&mut self, id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id() == id)
    }

    /// First list with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.name == name)
    }
}

impl FromIterator<TodoList> for Store {
    fn from_iter<I: IntoIterator<Item = TodoList>>(iter: I) -> Self {
        let mut store = Store::new();
        for list in iter {
            store.append(list);
        }
        store
    }
}
