//! Common routes: service info and health.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Service name, version, and route map. Served at `/` and `/api/v1/`.
pub(crate) async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Resourcify API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Create, read, update, and delete curated developer resources.",
        "endpoints": {
            "List all resources": "GET /api/v1/resources/all",
            "Get a resource": "GET /api/v1/resources/{id}",
            "Create a resource": "POST /api/v1/resources/",
            "Update a resource": "PUT /api/v1/resources/{id}",
            "Delete a resource": "DELETE /api/v1/resources/{id}"
        }
    }))
}

/// Common routes (no state): GET /, GET /health.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
}
