use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/quote", get(handlers::get_quote))
        .with_state(state)
}
