use std::sync::atomic::{AtomicU64, Ordering};

/// Placeholder text for any field the user has not filled in yet
pub const UNKNOWN: &str = "Unknown";

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The editable fields of an item, as carried by the item form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub description: String,
    pub assigned_to: String,
    pub due_date: String,
    pub completed: bool,
}

impl Default for ItemFields {
    fn default() -> Self {
        ItemFields {
            description: UNKNOWN.to_string(),
            assigned_to: UNKNOWN.to_string(),
            due_date: UNKNOWN.to_string(),
            completed: false,
        }
    }
}

/// A single task in a list.
///
/// Items are not `Clone`. The id is the item's identity and a list never
/// holds two items with the same id.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    pub description: String,
    pub assigned_to: String,
    pub due_date: String,
    pub completed: bool,
}

impl Item {
    /// Create an empty item with every text field set to "Unknown"
    pub fn new() -> Self {
        Self::from_fields(ItemFields::default())
    }

    pub fn from_fields(fields: ItemFields) -> Self {
        Item {
            id: ItemId::next(),
            description: fields.description,
            assigned_to: fields.assigned_to,
            due_date: fields.due_date,
            completed: fields.completed,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Snapshot of the editable fields
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            description: self.description.clone(),
            assigned_to: self.assigned_to.clone(),
            due_date: self.due_date.clone(),
            completed: self.completed,
        }
    }

    /// Overwrite every editable field, keeping the identity
    pub fn apply(&mut self, fields: ItemFields) {
        self.description = fields.description;
        self.assigned_to = fields.assigned_to;
        self.due_date = fields.due_date;
        self.completed = fields.completed;
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_unknown_defaults() {
        let item = Item::new();
        assert_eq!(item.description, "Unknown");
        assert_eq!(item.assigned_to, "Unknown");
        assert_eq!(item.due_date, "Unknown");
        assert!(!item.completed);
    }

    #[test]
    fn every_item_gets_a_distinct_id() {
        let a = Item::new();
        let b = Item::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn apply_overwrites_fields_but_keeps_id() {
        let mut item = Item::new();
        let id = item.id();
        item.apply(ItemFields {
            description: "Buy milk".into(),
            assigned_to: "Sam".into(),
            due_date: "2024-03-01".into(),
            completed: true,
        });
        assert_eq!(item.id(), id);
        assert_eq!(item.description, "Buy milk");
        assert_eq!(item.assigned_to, "Sam");
        assert_eq!(item.due_date, "2024-03-01");
        assert!(item.completed);
    }

    #[test]
    fn fields_snapshot_matches_item() {
        let mut item = Item::new();
        item.description = "Write report".into();
        let fields = item.fields();
        assert_eq!(fields.description, "Write report");
        assert_eq!(fields.assigned_to, "Unknown");
    }
}
