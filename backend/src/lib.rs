use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod api {
    pub mod prediction;
}
pub mod handlers {
    pub mod predict_handlers;
}
pub mod models {
    pub mod prediction_models;
}

use api::prediction::PredictionClient;
use config::Config;
use handlers::predict_handlers;

pub struct AppState {
    pub config: Config,
    pub prediction_client: PredictionClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let prediction_client = PredictionClient::new(&config)?;
        Ok(Self {
            config,
            prediction_client,
        })
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH]);
    match HeaderValue::from_str(&config.frontend_url) {
        Ok(origin) => cors.allow_origin(AllowOrigin::exact(origin)),
        Err(e) => {
            tracing::warn!("Ignoring invalid FRONTEND_URL {}: {}", config.frontend_url, e);
            cors
        }
    }
}

/// Gateway routes plus the built frontend. Unknown paths get `index.html`
/// so client-side routes load the app.
pub fn build_router(state: Arc<AppState>) -> Router {
    let index = state.config.static_dir.join("index.html");
    let frontend = ServeDir::new(&state.config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(predict_handlers::health_check))
        .route("/predict/", post(predict_handlers::predict))
        .fallback_service(frontend)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}
