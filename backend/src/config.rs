use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
pub const DEFAULT_PREDICTION_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the model service, without the `/predict/` suffix.
    pub prediction_service_url: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Allowed CORS origin.
    pub frontend_url: String,
    pub max_upload_bytes: usize,
    pub prediction_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let prediction_service_url = get("PREDICTION_SERVICE_URL")
            .ok_or(ConfigError::Missing("PREDICTION_SERVICE_URL"))?
            .trim_end_matches('/')
            .to_string();
        if !prediction_service_url.starts_with("http://") && !prediction_service_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "PREDICTION_SERVICE_URL",
                value: prediction_service_url,
            });
        }

        let frontend_url = get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        if HeaderValue::from_str(&frontend_url).is_err() {
            return Err(ConfigError::Invalid {
                name: "FRONTEND_URL",
                value: frontend_url,
            });
        }

        Ok(Self {
            prediction_service_url,
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            frontend_url,
            max_upload_bytes: parse_or(get("MAX_UPLOAD_BYTES"), "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            prediction_timeout: Duration::from_secs(parse_or(
                get("PREDICTION_TIMEOUT_SECS"),
                "PREDICTION_TIMEOUT_SECS",
                DEFAULT_PREDICTION_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict/", self.prediction_service_url)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, name: &'static str, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
    }
}
