use serde::{Deserialize, Serialize};

/// Wire representation of an item, exchanged as JSON over HTTP.
///
/// All three fields are required in every request body, including on
/// create where `id` is ignored and replaced by the storage-assigned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Creates an item with the given fields.
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Persisted representation of an item: one row of the `items` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Primary key, assigned by storage on insert and never changed.
    pub id: i64,
    pub name: String,
    pub description: String,
}
