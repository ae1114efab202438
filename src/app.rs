use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/interval/:interval", post(handlers::select_interval_form))
        .route("/api/view", get(handlers::get_view))
        .route("/api/interval", post(handlers::select_interval))
        .route("/api/buckets", get(handlers::get_buckets))
        .route("/health", get(handlers::health))
        .with_state(state)
}
