//! Router assembly: root info/health plus the versioned resource API.

mod common;
mod resource;

pub use common::common_routes;
pub use resource::resource_routes;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Full application router: info and health at the root, API under /api/v1.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(common::service_info))
        .merge(resource_routes(state));
    Router::new().merge(common_routes()).nest("/api/v1", api)
}
