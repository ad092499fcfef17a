use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{
        docs::{openapi, swagger_ui},
        health::{livez, readyz},
        items::{create_item, delete_item, get_item, list_items, update_item},
        root::welcome,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    let item_routes = Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        );

    let body_limit = match config.max_body_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(welcome))
        .route("/docs", get(swagger_ui))
        .route("/openapi.json", get(openapi))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(item_routes)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
