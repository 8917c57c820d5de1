//! Route definitions and router construction.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the portal router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::intake::form).post(handlers::intake::submit),
        )
        .route("/api/patients", post(handlers::api::create))
        .route("/api/patients/:id", get(handlers::api::get))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
