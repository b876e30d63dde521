pub mod aggregate;
pub mod api;
pub mod config;
pub mod contracts;
pub mod datadog;
pub mod runtime_host;
pub mod state;
pub mod tools;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the application router with all routes wired.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health_handler))
        .route("/api/tools", get(api::list_tools_handler))
        .route("/api/tools/{name}", post(api::call_tool_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
