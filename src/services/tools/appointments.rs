use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_args, InputSchema, PropertySchema, Tool, ToolContext};
use crate::errors::AppError;
use crate::services::webhook::{CANCEL_APPOINTMENT, HAS_APPOINTMENT};

pub struct HasAppointment;

#[async_trait]
impl Tool for HasAppointment {
    fn name(&self) -> &'static str {
        "has_appointment"
    }

    fn description(&self) -> &'static str {
        "Use this tool to check the caller has an appointment."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::object()
    }

    async fn call(&self, ctx: &mut ToolContext<'_>, _args: Value) -> Result<Value, AppError> {
        let data = json!({
            "call_time": ctx.session.call_time_iso(),
            "phone_number": ctx.session.phone_number(),
        });

        let response = ctx.webhook.post(HAS_APPOINTMENT, data).await?;

        let found = ctx.session.record_bookings(&response);
        tracing::info!(
            phone = ctx.session.phone_number().unwrap_or("unknown"),
            found,
            "looked up existing appointments"
        );

        Ok(Value::String(ctx.session.summarize()))
    }
}

pub struct CancelAppointment;

#[derive(Deserialize)]
struct CancelArgs {
    #[serde(rename = "bookingID")]
    booking_id: String,
}

#[async_trait]
impl Tool for CancelAppointment {
    fn name(&self) -> &'static str {
        "cancel_appointment"
    }

    fn description(&self) -> &'static str {
        "Use this tool to cancel an appointment."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::object().property(
            "bookingID",
            PropertySchema::string("Identifier of the booking to cancel"),
            true,
        )
    }

    async fn call(&self, ctx: &mut ToolContext<'_>, args: Value) -> Result<Value, AppError> {
        let args: CancelArgs = parse_args(args)?;

        tracing::info!(booking_id = %args.booking_id, "cancelling appointment");

        let data = json!({
            "bookingID": args.booking_id,
            "phone_number": ctx.session.phone_number(),
        });

        ctx.webhook.post(CANCEL_APPOINTMENT, data).await
    }
}
