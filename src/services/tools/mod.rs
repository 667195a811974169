//! Tools the conversational model can call during a call.
//!
//! Each tool declares a name, a model-facing description and an input
//! schema. The descriptions are read by the hosted model to decide which
//! tool to use, so they are part of the contract with it.

pub mod appointments;
pub mod availability;
pub mod booking;
pub mod prices;
pub mod schema;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{BookingStatus, CallSession};
use crate::services::webhook::BookingWebhook;

pub use appointments::{CancelAppointment, HasAppointment};
pub use availability::CheckAvailability;
pub use booking::BookSlot;
pub use prices::HaircutPrices;
pub use schema::{InputSchema, PropertySchema, ToolSchema};

/// Shop-wide settings the tools read.
#[derive(Debug, Clone, Copy)]
pub struct ToolSettings {
    pub timezone: Tz,
    pub booking_status: BookingStatus,
}

/// Everything a tool touches while it runs.
pub struct ToolContext<'a> {
    pub session: &'a mut CallSession,
    pub webhook: &'a dyn BookingWebhook,
    pub settings: ToolSettings,
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    /// Shown to the model.
    fn description(&self) -> &'static str;

    fn input_schema(&self) -> InputSchema;

    /// Phrase the agent says before waiting on this tool, if any.
    fn filler(&self) -> Option<&'static str> {
        None
    }

    async fn call(&self, ctx: &mut ToolContext<'_>, args: Value) -> Result<Value, AppError>;

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            filler: self.filler().map(str::to_string),
        }
    }
}

pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, AppError> {
    serde_json::from_value(args).map_err(|e| AppError::InvalidArguments(e.to_string()))
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five tools the barbershop agent works with.
    pub fn barbershop() -> Self {
        let mut registry = Self::new();
        registry.register(CheckAvailability);
        registry.register(BookSlot);
        registry.register(HasAppointment);
        registry.register(CancelAppointment);
        registry.register(HaircutPrices);
        registry
    }

    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Validates `args` against the tool's schema, then runs it.
    pub async fn invoke(
        &self,
        name: &str,
        ctx: &mut ToolContext<'_>,
        args: Value,
    ) -> Result<Value, AppError> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::UnknownTool(name.to_string()))?;

        tool.input_schema().validate(&args)?;

        tracing::info!(tool = name, "invoking tool");
        tool.call(ctx, args).await
    }
}
