use async_trait::async_trait;

use crate::item::Item;

use super::{Page, Result};

/// Item operations available inside one storage session.
///
/// Every method is a single unit of work: mutations are committed before the
/// method returns.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new row and returns it with the storage-assigned id.
    ///
    /// `item.id` is ignored.
    async fn create_item(&self, item: &Item) -> Result<Item>;

    /// Lists items in insertion order, skipping and limiting per `page`.
    async fn list_items(&self, page: Page) -> Result<Vec<Item>>;

    /// Gets an item by its id.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Overwrites `name` and `description` of the item stored under `id`.
    ///
    /// Returns `RepositoryError::NotFound` when no such row exists.
    async fn update_item(&self, id: i64, item: &Item) -> Result<Item>;

    /// Deletes the item stored under `id`.
    ///
    /// Returns `RepositoryError::NotFound` when no such row exists.
    async fn delete_item(&self, id: i64) -> Result<()>;

    /// Runs a trivial query to check that the store answers.
    async fn ping(&self) -> Result<()>;
}

/// Process-wide factory handing out one session per request.
///
/// A session is released when the returned box is dropped.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open_session(&self) -> Result<Box<dyn ItemRepository>>;
}
