// --- File: crates/linebook_line/src/routes.rs ---

use crate::handlers::{health_handler, webhook_handler, LineState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the router for the LINE webhook and the health check.
pub fn routes(state: Arc<LineState>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/webhook", post(webhook_handler))
        .with_state(state)
}
