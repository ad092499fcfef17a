use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use items_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::models::Detail;

/// Errors returned by the HTTP handlers.
///
/// Every variant renders as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No row exists for the requested item id.
    #[error("Item not found")]
    ItemNotFound,

    /// The request could not be parsed into the expected shape.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read, e.g. it exceeded the body limit.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Storage failed while serving the request.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ItemNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ApiError::ItemNotFound,
            other => ApiError::Repository(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                ApiError::Validation(rejection.body_text())
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Storage error");
        } else {
            tracing::warn!(status = %status, message = %self, "API error");
        }

        (status, Json(Detail::new(self.to_string()))).into_response()
    }
}
