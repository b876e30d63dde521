use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;
use crate::tools::ToolName;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    uptime: u64,
    tools: usize,
    credentials_configured: bool,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime: state.start_time.elapsed().as_secs(),
        tools: ToolName::ALL.len(),
        credentials_configured: state.config.datadog.has_credentials(),
    })
}
