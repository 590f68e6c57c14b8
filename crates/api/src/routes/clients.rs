//! Route definitions for client management.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Client routes mounted at `/clientes`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// PUT    /{ci}      -> update
/// DELETE /{ci}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route("/{ci}", put(clients::update).delete(clients::delete))
}
