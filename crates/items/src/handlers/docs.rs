//! API documentation.
//!
//! - `/openapi.json` - OpenAPI 3.1 document describing the public routes
//! - `/docs` - interactive Swagger UI page rendering that document

use axum::{response::Html, Json};
use serde_json::{json, Value};

const OPENAPI_URL: &str = "/openapi.json";

/// Handler for GET /openapi.json
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

/// Handler for GET /docs
pub async fn swagger_ui() -> Html<String> {
    Html(swagger_ui_page(OPENAPI_URL))
}

/// Renders the Swagger UI page pointed at `spec_url`.
///
/// Assets are loaded from the jsDelivr CDN.
fn swagger_ui_page(spec_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Items API - Swagger UI</title>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{spec_url}',
    dom_id: '#swagger-ui',
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
    layout: "BaseLayout",
    deepLinking: true
}})
</script>
</body>
</html>"#
    )
}

/// Builds the OpenAPI 3.1 document describing the public routes.
pub fn openapi_document() -> Value {
    let item_id_param = json!({
        "name": "item_id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer" }
    });
    let item_body = json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Item" } } }
    });
    let item_response = json!({
        "description": "Successful Response",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Item" } } }
    });
    let not_found = json!({
        "description": "Item not found",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Detail" } } }
    });
    let validation_error = json!({
        "description": "Validation Error",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Detail" } } }
    });

    let root = json!({
        "get": {
            "summary": "Read Root",
            "responses": {
                "200": {
                    "description": "Successful Response",
                    "content": { "application/json": { "schema": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    } } }
                }
            }
        }
    });

    let list_parameters = json!([
        { "name": "skip", "in": "query", "required": false,
          "schema": { "type": "integer", "default": 0 } },
        { "name": "limit", "in": "query", "required": false,
          "schema": { "type": "integer", "default": 100 } }
    ]);
    let list_response = json!({
        "description": "Successful Response",
        "content": { "application/json": { "schema": {
            "type": "array",
            "items": { "$ref": "#/components/schemas/Item" }
        } } }
    });
    let collection = json!({
        "get": {
            "summary": "Read Items",
            "parameters": list_parameters,
            "responses": { "200": list_response, "422": validation_error }
        },
        "post": {
            "summary": "Create Item",
            "requestBody": item_body,
            "responses": { "200": item_response, "422": validation_error }
        }
    });

    let deleted_response = json!({
        "description": "Successful Response",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Detail" } } }
    });
    let member = json!({
        "get": {
            "summary": "Read Item",
            "parameters": [item_id_param],
            "responses": { "200": item_response, "404": not_found, "422": validation_error }
        },
        "put": {
            "summary": "Update Item",
            "parameters": [item_id_param],
            "requestBody": item_body,
            "responses": { "200": item_response, "404": not_found, "422": validation_error }
        },
        "delete": {
            "summary": "Delete Item",
            "parameters": [item_id_param],
            "responses": { "200": deleted_response, "404": not_found, "422": validation_error }
        }
    });

    let schemas = json!({
        "Item": {
            "type": "object",
            "required": ["id", "name", "description"],
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" },
                "description": { "type": "string" }
            }
        },
        "Detail": {
            "type": "object",
            "required": ["detail"],
            "properties": { "detail": { "type": "string" } }
        }
    });

    json!({
        "openapi": "3.1.0",
        "info": { "title": "Items API", "version": env!("CARGO_PKG_VERSION") },
        "paths": {
            "/": root,
            "/items/": collection,
            "/items/{item_id}": member
        },
        "components": { "schemas": schemas }
    })
}
