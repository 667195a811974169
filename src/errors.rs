use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("webhook request failed: {0}")]
    Webhook(#[from] reqwest::Error),

    #[error("webhook returned a non-JSON body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown service category: {0}")]
    UnknownCategory(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Webhook(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnknownCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidArguments(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTime(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownTool(_) => StatusCode::NOT_FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
