use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{parse_args, InputSchema, PropertySchema, Tool, ToolContext};
use crate::errors::AppError;
use crate::models::ServiceCategory;
use crate::services::pricing::price_lookup;

pub struct HaircutPrices;

#[derive(Deserialize)]
struct Args {
    category: String,
}

#[async_trait]
impl Tool for HaircutPrices {
    fn name(&self) -> &'static str {
        "haircut_prices"
    }

    fn description(&self) -> &'static str {
        "Get haircut prices.\n\n\
         Args:\n    \
         category: The category of the haircut.\n\n\
         Returns:\n    \
         The price of that category."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::object().property(
            "category",
            PropertySchema::enum_type("The category of the haircut", ServiceCategory::names()),
            true,
        )
    }

    async fn call(&self, _ctx: &mut ToolContext<'_>, args: Value) -> Result<Value, AppError> {
        let args: Args = parse_args(args)?;
        let price = price_lookup(&args.category)?;
        Ok(Value::String(price.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::tools::test_support::*;

    #[tokio::test]
    async fn test_price_lookup_is_local() {
        let webhook = RecordingWebhook::replying(json!({}));
        let mut session = session(None);
        let mut ctx = ToolContext {
            session: &mut session,
            webhook: &webhook,
            settings: settings(),
        };

        let output = HaircutPrices
            .call(&mut ctx, json!({"category": "skin_fade"}))
            .await
            .unwrap();

        assert_eq!(output, json!("25 euro"));
        assert!(webhook.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_is_an_error() {
        let webhook = RecordingWebhook::replying(json!({}));
        let mut session = session(None);
        let mut ctx = ToolContext {
            session: &mut session,
            webhook: &webhook,
            settings: settings(),
        };

        let err = HaircutPrices
            .call(&mut ctx, json!({"category": "afro"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownCategory(_)));
    }
}
