use crate::config::AppConfig;
use crate::services::calls::CallRegistry;
use crate::services::tools::{ToolRegistry, ToolSettings};
use crate::services::webhook::BookingWebhook;

pub struct AppState {
    pub config: AppConfig,
    pub webhook: Box<dyn BookingWebhook>,
    pub tools: ToolRegistry,
    pub calls: CallRegistry,
}

impl AppState {
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            timezone: self.config.timezone,
            booking_status: self.config.booking_status,
        }
    }
}
