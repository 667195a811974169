use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::prompt::{system_instructions, GREETING_INSTRUCTIONS};
use crate::state::AppState;

use super::check_auth;

/// Call attribute the telephony layer uses for the caller's number.
pub const PHONE_ATTRIBUTE: &str = "sip.phoneNumber";

#[derive(Deserialize)]
pub struct StartCall {
    pub phone_number: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

#[derive(Serialize)]
pub struct CallStarted {
    call_id: Uuid,
    call_time: String,
    summary: String,
    instructions: String,
    greeting: &'static str,
}

#[derive(Serialize)]
pub struct CallSummary {
    call_id: Uuid,
    summary: String,
}

// POST /api/calls
pub async fn start_call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<StartCall>,
) -> Result<Json<CallStarted>, AppError> {
    check_auth(&headers, &state.config.api_token)?;

    let StartCall {
        phone_number,
        mut attributes,
    } = payload;
    let phone = phone_number.or_else(|| attributes.remove(PHONE_ATTRIBUTE));
    let now = Utc::now().with_timezone(&state.config.timezone);

    let (call_id, session) = state.calls.start(phone, now);
    let (summary, call_time) = {
        let session = session.lock().await;
        (session.summarize(), session.call_time_iso())
    };

    tracing::info!(
        call_id = %call_id,
        active = state.calls.active(),
        summary = %summary,
        "call started"
    );

    Ok(Json(CallStarted {
        call_id,
        call_time,
        summary,
        instructions: system_instructions(now),
        greeting: GREETING_INSTRUCTIONS,
    }))
}

// GET /api/calls/:id
pub async fn get_call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(call_id): Path<Uuid>,
) -> Result<Json<CallSummary>, AppError> {
    check_auth(&headers, &state.config.api_token)?;

    let session = state
        .calls
        .get(&call_id)
        .ok_or_else(|| AppError::NotFound(format!("call {call_id}")))?;
    let summary = session.lock().await.summarize();

    Ok(Json(CallSummary { call_id, summary }))
}

// DELETE /api/calls/:id
pub async fn end_call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(call_id): Path<Uuid>,
) -> Result<Json<CallSummary>, AppError> {
    check_auth(&headers, &state.config.api_token)?;

    let session = state
        .calls
        .end(&call_id)
        .ok_or_else(|| AppError::NotFound(format!("call {call_id}")))?;
    let summary = session.lock().await.summarize();

    tracing::info!(call_id = %call_id, summary = %summary, "call ended");

    Ok(Json(CallSummary { call_id, summary }))
}
