use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::tools::{ToolContext, ToolSchema};
use crate::state::AppState;

use super::check_auth;

#[derive(Serialize)]
pub struct ToolResult {
    tool: String,
    output: Value,
}

// GET /api/tools
pub async fn list_tools(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ToolSchema>>, AppError> {
    check_auth(&headers, &state.config.api_token)?;
    Ok(Json(state.tools.schemas()))
}

// POST /api/calls/:id/tools/:name
pub async fn invoke_tool(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((call_id, tool)): Path<(Uuid, String)>,
    body: Bytes,
) -> Result<Json<ToolResult>, AppError> {
    check_auth(&headers, &state.config.api_token)?;

    let args: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidArguments(e.to_string()))?
    };

    let session = state
        .calls
        .get(&call_id)
        .ok_or_else(|| AppError::NotFound(format!("call {call_id}")))?;

    // Held for the whole invocation: tools of one call run one at a time.
    let mut session = session.lock().await;
    let mut ctx = ToolContext {
        session: &mut session,
        webhook: state.webhook.as_ref(),
        settings: state.tool_settings(),
    };

    let output = state
        .tools
        .invoke(&tool, &mut ctx, args)
        .await
        .inspect_err(|e| {
            tracing::error!(call_id = %call_id, tool = %tool, error = %e, "tool invocation failed")
        })?;

    Ok(Json(ToolResult { tool, output }))
}
