use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_args, InputSchema, PropertySchema, Tool, ToolContext};
use crate::errors::AppError;
use crate::services::slots::SlotWindow;
use crate::services::webhook::CHECK_AVAILABILITY;

pub struct CheckAvailability;

#[derive(Deserialize)]
struct Args {
    start_time: String,
}

#[async_trait]
impl Tool for CheckAvailability {
    fn name(&self) -> &'static str {
        "check_availability"
    }

    fn description(&self) -> &'static str {
        "Use this tool to check for the availability of the date and time given by the client."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::object().property(
            "start_time",
            PropertySchema::string("Requested start of the slot, ISO-8601 date-time"),
            true,
        )
    }

    fn filler(&self) -> Option<&'static str> {
        Some("Attendez un instant, je vais vérifier la disponibilité du créneau que vous avez demandé.")
    }

    async fn call(&self, ctx: &mut ToolContext<'_>, args: Value) -> Result<Value, AppError> {
        let args: Args = parse_args(args)?;
        let slot = SlotWindow::starting_at(&args.start_time, ctx.settings.timezone)?;

        tracing::info!(start = %slot.start_iso(), end = %slot.end_iso(), "checking availability");

        let data = json!({
            "call_time": ctx.session.call_time_iso(),
            "start": slot.start_iso(),
            "end": slot.end_iso(),
        });

        let response = ctx.webhook.post(CHECK_AVAILABILITY, data).await?;
        Ok(json!({ "message": response }))
    }
}
