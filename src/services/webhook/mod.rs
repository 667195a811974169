pub mod http;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

pub const CHECK_AVAILABILITY: &str = "check_availability";
pub const BOOK_APPOINTMENT: &str = "book_appointment";
pub const HAS_APPOINTMENT: &str = "has_appointment";
pub const CANCEL_APPOINTMENT: &str = "cancel_appointment";

/// Body of every outbound webhook request.
#[derive(Debug, Serialize)]
pub struct ToolEnvelope<'a> {
    pub tool: &'a str,
    pub data: &'a Value,
}

/// Delivers one tool invocation to the external booking system.
#[async_trait]
pub trait BookingWebhook: Send + Sync {
    async fn post(&self, tool: &str, data: Value) -> Result<Value, AppError>;
}
