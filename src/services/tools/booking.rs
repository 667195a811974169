use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_args, InputSchema, PropertySchema, Tool, ToolContext};
use crate::errors::AppError;
use crate::models::{BookingRequest, ServiceCategory};
use crate::services::slots::SlotWindow;
use crate::services::webhook::BOOK_APPOINTMENT;

pub struct BookSlot;

#[derive(Deserialize)]
struct Args {
    name: String,
    start_time: String,
    category: String,
}

#[async_trait]
impl Tool for BookSlot {
    fn name(&self) -> &'static str {
        "book_slot"
    }

    fn description(&self) -> &'static str {
        "Book a slot for a service.\n\n\
         Args:\n    \
         name: The name of the client.\n    \
         start_time: The start of the slot to book, as an ISO-8601 date-time.\n    \
         category: The category of the service chosen by the client.\n\n\
         Returns:\n    \
         A confirmation message"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::object()
            .property("name", PropertySchema::string("The name of the client"), true)
            .property(
                "start_time",
                PropertySchema::string("Start of the slot, ISO-8601 date-time"),
                true,
            )
            .property(
                "category",
                PropertySchema::enum_type(
                    "The category of the service chosen by the client",
                    ServiceCategory::names(),
                ),
                true,
            )
    }

    async fn call(&self, ctx: &mut ToolContext<'_>, args: Value) -> Result<Value, AppError> {
        let args: Args = parse_args(args)?;
        let category: ServiceCategory = args.category.parse()?;
        let slot = SlotWindow::starting_at(&args.start_time, ctx.settings.timezone)?;

        tracing::info!(
            phone = ctx.session.phone_number().unwrap_or("unknown"),
            category = %category,
            date = %slot.date(),
            start = %slot.start_clock(),
            end = %slot.end_clock(),
            "booking slot"
        );

        let request = BookingRequest {
            call_time: ctx.session.call_time_iso(),
            phone_number: ctx.session.phone_number().map(str::to_string),
            name: args.name.clone(),
            category,
            start_time: slot.start_iso(),
            end_time: slot.end_iso(),
            date: slot.date(),
            start: slot.start_clock(),
            end: slot.end_clock(),
            status: ctx.settings.booking_status,
        };

        let data = serde_json::to_value(&request)
            .map_err(|e| AppError::InvalidArguments(e.to_string()))?;
        let response = ctx.webhook.post(BOOK_APPOINTMENT, data).await?;

        // Only a booking the webhook accepted names the caller.
        ctx.session.customer_name = Some(args.name);
        Ok(json!({ "message": response }))
    }
}
