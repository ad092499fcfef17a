//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use items_core::item::{item_to_record, record_to_item, Item, ItemRecord};
use items_core::storage::{ItemRepository, Page, RepositoryError, Result, SessionFactory};

/// In-memory storage backend for testing.
///
/// Rows live in a `BTreeMap` keyed by id, so iteration follows insertion
/// order. Ids are assigned as `max(id) + 1`, like an SQLite rowid.
/// Data is not persisted and will be lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<RwLock<BTreeMap<i64, ItemRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionFactory for InMemoryRepository {
    async fn open_session(&self) -> Result<Box<dyn ItemRepository>> {
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn create_item(&self, item: &Item) -> Result<Item> {
        let mut rows = self.rows.write().await;
        let id = rows.keys().next_back().map_or(1, |max| max + 1);
        let record = item_to_record(id, item);
        rows.insert(id, record.clone());
        Ok(record_to_item(record))
    }

    async fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        let rows = self.rows.read().await;
        let (start, end) = page.bounds(rows.len());
        Ok(rows
            .values()
            .skip(start)
            .take(end - start)
            .cloned()
            .map(record_to_item)
            .collect())
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned().map(record_to_item))
    }

    async fn update_item(&self, id: i64, item: &Item) -> Result<Item> {
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::item_not_found(id))?;
        *row = item_to_record(id, item);
        Ok(record_to_item(row.clone()))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.remove(&id).is_none() {
            return Err(RepositoryError::item_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
