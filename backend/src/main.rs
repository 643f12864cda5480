use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use backend::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(
        "Forwarding predictions to {} (timeout {:?}, upload limit {} bytes)",
        config.predict_url(),
        config.prediction_timeout,
        config.max_upload_bytes
    );
    tracing::info!("Serving frontend from {}", config.static_dir.display());

    let port = config.port;
    let state = Arc::new(AppState::new(config).context("Failed to build HTTP client")?);
    let app = build_router(state);

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
