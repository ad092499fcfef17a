mod conversions;
mod types;

pub use conversions::{item_to_record, record_to_item};
pub use types::{Item, ItemRecord};
