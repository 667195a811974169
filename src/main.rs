use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barbercall::config::AppConfig;
use barbercall::handlers;
use barbercall::services::calls::CallRegistry;
use barbercall::services::tools::ToolRegistry;
use barbercall::services::webhook::http::HttpWebhook;
use barbercall::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    anyhow::ensure!(!config.webhook_url.is_empty(), "WEBHOOK_URL must be set");
    if config.api_token.is_empty() {
        tracing::warn!("API_TOKEN not set, /api routes are unauthenticated");
    }

    tracing::info!(
        timezone = %config.timezone.name(),
        booking_status = config.booking_status.as_str(),
        "booking webhook configured"
    );

    let tools = ToolRegistry::barbershop();
    tracing::info!(tools = ?tools.names(), "tool registry ready");

    let state = Arc::new(AppState {
        webhook: Box::new(HttpWebhook::new(config.webhook_url.clone())),
        config: config.clone(),
        tools,
        calls: CallRegistry::new(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/tools", get(handlers::tools::list_tools))
        .route("/api/calls", post(handlers::calls::start_call))
        .route(
            "/api/calls/:id",
            get(handlers::calls::get_call).delete(handlers::calls::end_call),
        )
        .route(
            "/api/calls/:id/tools/:name",
            post(handlers::tools::invoke_tool),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
