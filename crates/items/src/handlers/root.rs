//! Welcome route.

use axum::Json;

use crate::models::Welcome;

/// Handler for GET /
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::default())
}
