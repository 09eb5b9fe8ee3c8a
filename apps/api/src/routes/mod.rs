pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::poetry::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Poem API
        .route("/api/v1/poems", post(handlers::handle_generate_poem))
        .route("/api/v1/poems/options", get(handlers::handle_poem_options))
        .with_state(state)
}
