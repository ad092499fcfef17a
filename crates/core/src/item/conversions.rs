//! Field-by-field mapping between the wire and persisted item shapes.
//!
//! Pure functions, no I/O.

use super::{Item, ItemRecord};

/// Converts a stored row into its wire representation.
pub fn record_to_item(record: ItemRecord) -> Item {
    Item {
        id: record.id,
        name: record.name,
        description: record.description,
    }
}

/// Builds the row that should be stored under `id` for the given payload.
///
/// The payload's own `id` is not consulted: identity always comes from
/// storage (on create) or from the request path (on update).
pub fn item_to_record(id: i64, item: &Item) -> ItemRecord {
    ItemRecord {
        id,
        name: item.name.clone(),
        description: item.description.clone(),
    }
}
