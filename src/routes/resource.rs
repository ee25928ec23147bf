//! Resource CRUD routes under the versioned API prefix.

use crate::handlers::resource::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/resources/all` is the canonical list route; `/resources/` doubles as the
/// create target and a list alias.
pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/resources/", get(list).post(create))
        .route("/resources/all", get(list))
        .route(
            "/resources/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
