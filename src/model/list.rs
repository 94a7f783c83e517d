use std::sync::atomic::{AtomicU64, Ordering};

use super::item::{Item, ItemId, UNKNOWN};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`TodoList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

impl ListId {
    fn next() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Error type for positional list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("index {index} is out of range for a list of {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("item {index} is already at the {edge} of the list")]
    AtEdge { index: usize, edge: &'static str },
}

/// A named, owned, ordered collection of items
#[derive(Debug)]
pub struct TodoList {
    id: ListId,
    pub name: String,
    pub owner: String,
    items: Vec<Item>,
}

impl TodoList {
    /// Create an empty list named and owned by "Unknown"
    pub fn new() -> Self {
        TodoList {
            id: ListId::next(),
            name: UNKNOWN.to_string(),
            owner: UNKNOWN.to_string(),
            items: Vec::new(),
        }
    }

    pub fn with_name(name: impl Into<String>, owner: impl Into<String>) -> Self {
        let mut list = Self::new();
        list.name = name.into();
        list.owner = owner.into();
        list
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item to the end of the list.
    /// An item whose id is already present is not added a second time.
    pub fn add_item(&mut self, item: Item) {
        if self.index_of(item.id()).is_some() {
            return;
        }
        self.items.push(item);
    }

    /// Remove the item with the given id, returning it if it was present
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.index_of(id)?;
        Some(self.items.remove(index))
    }

    /// Remove the item at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Item, ListError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Exchange the items at two positions
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ListError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Swap the item at `index` with the one above it
    pub fn move_up(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        if index == 0 {
            return Err(ListError::AtEdge { index, edge: "top" });
        }
        self.swap(index - 1, index)
    }

    /// Swap the item at `index` with the one below it
    pub fn move_down(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        if index + 1 == self.items.len() {
            return Err(ListError::AtEdge {
                index,
                edge: "bottom",
            });
        }
        self.swap(index, index + 1)
    }

    /// Stable in-place sort of the items
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Item, &Item) -> std::cmp::Ordering,
    {
        self.items.sort_by(compare);
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
