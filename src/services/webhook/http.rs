use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use super::{BookingWebhook, ToolEnvelope};
use crate::errors::AppError;

/// `accept` and `Content-Type` both set to `application/json`.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Sends `{tool, data}` in a single POST and parses the reply as JSON.
///
/// One round trip, no retry and no timeout. Transport failures and non-2xx
/// statuses come back as [`AppError::Webhook`], a body that is not JSON as
/// [`AppError::MalformedResponse`].
pub async fn post(
    client: &reqwest::Client,
    url: &str,
    headers: &HeaderMap,
    tool_name: &str,
    data: &Value,
) -> Result<Value, AppError> {
    let envelope = ToolEnvelope {
        tool: tool_name,
        data,
    };

    let resp = client
        .post(url)
        .headers(headers.clone())
        .json(&envelope)
        .send()
        .await?
        .error_for_status()?;

    let body = resp.bytes().await?;
    let value: Value = serde_json::from_slice(&body)?;
    Ok(value)
}

pub struct HttpWebhook {
    url: String,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl HttpWebhook {
    pub fn new(url: String) -> Self {
        Self {
            url,
            headers: default_headers(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingWebhook for HttpWebhook {
    async fn post(&self, tool: &str, data: Value) -> Result<Value, AppError> {
        tracing::info!(tool, "calling booking webhook");

        let response = post(&self.client, &self.url, &self.headers, tool, &data)
            .await
            .inspect_err(|e| tracing::error!(tool, error = %e, "booking webhook failed"))?;

        tracing::debug!(tool, response = %response, "booking webhook replied");
        Ok(response)
    }
}
