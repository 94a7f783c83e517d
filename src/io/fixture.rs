use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::item::{Item, ItemFields, UNKNOWN};
use crate::model::list::TodoList;
use crate::model::store::Store;

/// Error type for loading a list fixture
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse fixture: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Top level of a fixture document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDoc {
    pub lists: Vec<FixtureList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureList {
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub items: Vec<FixtureItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureItem {
    #[serde(default = "unknown")]
    pub description: String,
    #[serde(default = "unknown")]
    pub assigned_to: String,
    #[serde(default = "unknown")]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

impl From<FixtureItem> for Item {
    fn from(data: FixtureItem) -> Self {
        Item::from_fields(ItemFields {
            description: data.description,
            assigned_to: data.assigned_to,
            due_date: data.due_date,
            completed: data.completed,
        })
    }
}

impl From<FixtureList> for TodoList {
    fn from(data: FixtureList) -> Self {
        let mut list = TodoList::with_name(data.name, data.owner);
        for item in data.items {
            list.add_item(item.into());
        }
        list
    }
}

/// Parse fixture JSON into lists, in document order.
/// Parsing is all-or-nothing: a malformed document yields no lists at all.
pub fn parse_fixture(text: &str) -> Result<Vec<TodoList>, FixtureError> {
    let doc: FixtureDoc = serde_json::from_str(text)?;
    Ok(doc.lists.into_iter().map(TodoList::from).collect())
}

/// Read a fixture file and build a store from it
pub fn load_fixture(path: &Path) -> Result<Store, FixtureError> {
    let text = fs::read_to_string(path).map_err(|e| FixtureError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let store: Store = parse_fixture(&text)?.into_iter().collect();
    info!(path = %path.display(), lists = store.len(), "loaded fixture");
    Ok(store)
}
