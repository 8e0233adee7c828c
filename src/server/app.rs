//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::server::handlers;
use crate::server::state::AppState;

/// `GET /generate` is the only route; other methods on it get a 405.
/// HEAD is registered explicitly, otherwise axum would serve it with the
/// GET handler and trigger a render.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/generate",
            get(handlers::generate)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
