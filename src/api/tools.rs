use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use crate::contracts::params::ValidationError;
use crate::state::AppState;
use crate::tools::{self, ToolDefinition, ToolError, tool_definitions};

#[derive(Serialize)]
pub struct ToolsResponse {
    tools: Vec<ToolDefinition>,
}

#[derive(Serialize)]
struct InvalidArgumentsResponse {
    error: &'static str,
    details: Vec<ValidationError>,
}

/// GET /api/tools — the tool catalogue with input schemas.
pub async fn list_tools_handler() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: tool_definitions(),
    })
}

/// POST /api/tools/{name} — run one tool with a JSON arguments body.
/// An empty body is treated as no arguments.
pub async fn call_tool_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Response {
    let args: Value = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(&body) {
            Ok(v) => v,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("invalid JSON body: {e}") })),
                )
                    .into_response();
            }
        }
    };

    match tools::call_tool(state.rum.as_ref(), &name, &args).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ToolError) -> Response {
    match err {
        ToolError::Validation(details) => (
            StatusCode::BAD_REQUEST,
            Json(InvalidArgumentsResponse {
                error: "Invalid tool arguments",
                details,
            }),
        )
            .into_response(),
        ToolError::UnknownTool(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Unknown tool" })),
        )
            .into_response(),
        ToolError::NoData(_) | ToolError::Upstream(_) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        ToolError::Serialize(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response(),
    }
}
