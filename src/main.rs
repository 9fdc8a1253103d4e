use brand_insight_service::config::AppConfig;
use brand_insight_service::observability::init_tracing;
use brand_insight_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let config = AppConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; analyze requests will fail until it is");
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
