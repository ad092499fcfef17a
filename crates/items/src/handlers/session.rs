//! Axum extractor handing each request its own storage session.

use std::ops::Deref;

use axum::{extract::FromRequestParts, http::request::Parts};

use items_core::storage::ItemRepository;

use super::ApiError;
use crate::state::AppState;

/// A storage session scoped to one request.
///
/// Opened when the handler's arguments are extracted and released when the
/// handler returns, whichever way it exits.
pub struct DbSession(Box<dyn ItemRepository>);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.open_session().await?;
        Ok(Self(session))
    }
}

impl Deref for DbSession {
    type Target = dyn ItemRepository;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
