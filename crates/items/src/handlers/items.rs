//! Item CRUD handlers.
//!
//! Each handler receives its own storage session, performs one storage
//! operation, and releases the session on return.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use items_core::item::Item;
use items_core::storage::Page;

use super::{session::DbSession, ApiError};
use crate::models::Detail;

/// Create a new item (POST /items/).
///
/// The `id` in the body is required but ignored; storage assigns the id.
pub async fn create_item(
    session: DbSession,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create item request");

    let item = session.create_item(&payload).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Created new item");

    Ok(Json(item))
}

/// List items (GET /items/?skip=&limit=).
pub async fn list_items(
    session: DbSession,
    query: Result<Query<Page>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(page) = query?;

    let items = session.list_items(page).await?;

    Ok(Json(items))
}

/// Get a single item by id (GET /items/{item_id}).
pub async fn get_item(
    session: DbSession,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(item_id) = path?;

    session
        .get_item(item_id)
        .await?
        .map(Json)
        .ok_or(ApiError::ItemNotFound)
}

/// Update an item by id (PUT /items/{item_id}).
///
/// Overwrites `name` and `description`; the path id governs identity.
pub async fn update_item(
    session: DbSession,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(item_id) = path?;
    let Json(payload) = payload?;

    let item = session.update_item(item_id, &payload).await?;

    tracing::info!(item_id, "Updated item");

    Ok(Json(item))
}

/// Delete an item by id (DELETE /items/{item_id}).
pub async fn delete_item(
    session: DbSession,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Detail>, ApiError> {
    let Path(item_id) = path?;

    session.delete_item(item_id).await?;

    tracing::info!(item_id, "Deleted item");

    Ok(Json(Detail::new("Item deleted")))
}
