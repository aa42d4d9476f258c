//! Route table

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the service router over the shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/emotions",
            get(handlers::list).post(handlers::create),
        )
        .route(
            "/emotions/:id",
            get(handlers::get_by_id)
                .put(handlers::replace)
                .patch(handlers::patch)
                .delete(handlers::soft_delete),
        )
        .with_state(state)
}
