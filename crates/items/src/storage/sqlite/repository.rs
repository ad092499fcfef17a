//! SQLite gateway and per-request sessions.
//!
//! `SqliteGateway` owns the process-wide connection (a handle to the
//! dedicated SQLite thread run by `tokio_rusqlite`). Each request gets a
//! `SqliteSession` derived from it; every session operation runs inside its
//! own transaction that is committed before the operation returns.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use items_core::item::{item_to_record, record_to_item, Item};
use items_core::storage::{ItemRepository, Page, RepositoryError, Result, SessionFactory};

use super::conversions::row_to_record;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed session factory bound to a single database.
pub struct SqliteGateway {
    conn: Connection,
}

impl SqliteGateway {
    /// Opens a file-based database and makes sure the schema exists.
    ///
    /// The database file will be created if it doesn't exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path = %path.display(), "Opened SQLite item store");

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the gateway is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Derives a new session from the shared connection.
    pub fn session(&self) -> SqliteSession {
        SqliteSession::new(self.conn.clone())
    }
}

#[async_trait]
impl SessionFactory for SqliteGateway {
    async fn open_session(&self) -> Result<Box<dyn ItemRepository>> {
        Ok(Box::new(self.session()))
    }
}

/// One unit of storage work. Released when dropped.
pub struct SqliteSession {
    id: Uuid,
    conn: Connection,
}

impl SqliteSession {
    fn new(conn: Connection) -> Self {
        let id = Uuid::new_v4();
        tracing::trace!(session_id = %id, "Opened storage session");
        Self { id, conn }
    }
}

impl Drop for SqliteSession {
    fn drop(&mut self) {
        tracing::trace!(session_id = %self.id, "Released storage session");
    }
}

#[async_trait]
impl ItemRepository for SqliteSession {
    async fn create_item(&self, item: &Item) -> Result<Item> {
        let name = item.name.clone();
        let description = item.description.clone();

        let record = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::INSERT_ITEM, rusqlite::params![name, description])
                    .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                let record = tx
                    .query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_record)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(record)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(record_to_item(record))
    }

    async fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        let records = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEMS_PAGE).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([page.limit, page.skip], row_to_record)
                    .map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(records.into_iter().map(record_to_item).collect())
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let record = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_record) {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))?;

        Ok(record.map(record_to_item))
    }

    async fn update_item(&self, id: i64, item: &Item) -> Result<Item> {
        let record = item_to_record(id, item);

        let refreshed = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::UPDATE_ITEM,
                        rusqlite::params![record.id, record.name, record.description],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                let refreshed = tx
                    .query_row(schema::SELECT_ITEM_BY_ID, [record.id], row_to_record)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(refreshed)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))?;

        Ok(record_to_item(refreshed))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn gateway() -> SqliteGateway {
        SqliteGateway::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_ignores_payload_id() {
        let session = gateway().await.session();

        let created = session
            .create_item(&Item::new(0, "Pen", "Blue ink"))
            .await
            .unwrap();

        assert_eq!(created, Item::new(1, "Pen", "Blue ink"));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let session = gateway().await.session();

        let created = session
            .create_item(&Item::new(99, "Ruler", "30cm"))
            .await
            .unwrap();
        let loaded = session.get_item(created.id).await.unwrap().unwrap();

        assert_eq!(loaded.name, "Ruler");
        assert_eq!(loaded.description, "30cm");
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let session = gateway().await.session();

        assert_eq!(session.get_item(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sessions_share_the_store() {
        let gateway = gateway().await;

        let created = {
            let session = gateway.session();
            session
                .create_item(&Item::new(0, "Pen", "Blue ink"))
                .await
                .unwrap()
        };

        let other = gateway.open_session().await.unwrap();
        assert_eq!(other.get_item(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_list_in_insertion_order_with_skip_and_limit() {
        let session = gateway().await.session();
        for n in 1..=5 {
            session
                .create_item(&Item::new(0, format!("item-{n}"), "x"))
                .await
                .unwrap();
        }

        let all = session.list_items(Page::default()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["item-1", "item-2", "item-3", "item-4", "item-5"]);

        let window = session.list_items(Page::new(1, 2)).await.unwrap();
        let ids: Vec<i64> = window.iter().map(|item| item.id).collect();
        assert_eq!(ids, [2, 3]);

        let past_end = session.list_items(Page::new(10, 100)).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_list_negative_limit_returns_everything() {
        let session = gateway().await.session();
        for _ in 0..3 {
            session.create_item(&Item::new(0, "a", "b")).await.unwrap();
        }

        let items = session.list_items(Page::new(0, -1)).await.unwrap();

        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let session = gateway().await.session();
        let created = session
            .create_item(&Item::new(0, "Pen", "Blue ink"))
            .await
            .unwrap();

        let updated = session
            .update_item(created.id, &Item::new(500, "Pen", "Black ink"))
            .await
            .unwrap();

        assert_eq!(updated, Item::new(created.id, "Pen", "Black ink"));
        assert_eq!(session.get_item(500).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let session = gateway().await.session();
        let created = session
            .create_item(&Item::new(0, "Pen", "Blue ink"))
            .await
            .unwrap();
        let payload = Item::new(created.id, "Marker", "Green");

        let first = session.update_item(created.id, &payload).await.unwrap();
        let second = session.update_item(created.id, &payload).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(session.get_item(created.id).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let session = gateway().await.session();

        let result = session.update_item(8, &Item::new(8, "a", "b")).await;

        assert_eq!(result, Err(RepositoryError::item_not_found(8)));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let session = gateway().await.session();
        let created = session
            .create_item(&Item::new(0, "Pen", "Blue ink"))
            .await
            .unwrap();

        session.delete_item(created.id).await.unwrap();

        assert_eq!(session.get_item(created.id).await.unwrap(), None);
        assert_eq!(
            session.delete_item(created.id).await,
            Err(RepositoryError::item_not_found(created.id))
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let session = gateway().await.session();

        session.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");

        let created = {
            let gateway = SqliteGateway::open(&path).await.unwrap();
            gateway
                .session()
                .create_item(&Item::new(0, "Pen", "Blue ink"))
                .await
                .unwrap()
        };

        let reopened = SqliteGateway::open(&path).await.unwrap();
        let loaded = reopened.session().get_item(created.id).await.unwrap();

        assert_eq!(loaded, Some(created));
    }

    #[tokio::test]
    async fn test_open_rejects_non_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.db");
        std::fs::write(&path, vec![0x42; 4096]).unwrap();

        let result = SqliteGateway::open(&path).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
