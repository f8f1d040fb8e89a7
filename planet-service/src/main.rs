use planet_service::config::PlanetConfig;
use planet_service::startup::Application;
use service_core::middleware::init_metrics;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PlanetConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "planet-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    // Must run before any metrics are recorded
    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start planet-service: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    let result = app.run_until_stopped().await;
    shutdown_tracing();

    result.map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
