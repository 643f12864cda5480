use bytes::Bytes;
use reqwest::multipart;
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::{AppError, GENERIC_UPSTREAM_ERROR};
use crate::models::prediction_models::{Prediction, UpstreamError};

/// Multipart field the model service reads the image from.
pub const FILE_FIELD: &str = "file";

/// Image received from the browser, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Forwards uploads to the model service's `/predict/` endpoint.
#[derive(Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    url: String,
}

impl PredictionClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.prediction_timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.predict_url(),
        })
    }

    pub async fn predict(&self, image: UploadedImage) -> Result<Prediction, AppError> {
        let size = image.data.len();
        let mut part = multipart::Part::stream_with_length(image.data, size as u64).file_name(image.file_name.clone());
        if let Some(content_type) = &image.content_type {
            part = part.mime_str(content_type).map_err(|e| {
                AppError::Multipart(format!("Invalid content type {}: {}", content_type, e))
            })?;
        }
        let form = multipart::Form::new().part(FILE_FIELD, part);

        tracing::info!("Forwarding {} ({} bytes) to {}", image.file_name, size, self.url);
        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("Prediction service timed out: {}", e);
                } else {
                    tracing::error!("Failed to reach prediction service: {}", e);
                }
                AppError::UpstreamUnavailable
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read prediction response: {}", e);
            AppError::UpstreamUnavailable
        })?;
        tracing::debug!("Prediction service answered {}: {}", status, body);

        interpret_response(status, &body)
    }
}

/// Turns the model service's answer into a prediction or a gateway error.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Prediction, AppError> {
    if status.is_success() {
        return serde_json::from_str::<Prediction>(body).map_err(|e| {
            tracing::error!("Malformed prediction body: {}", e);
            AppError::MalformedUpstream
        });
    }

    let message = serde_json::from_str::<UpstreamError>(body)
        .ok()
        .and_then(|err| err.message())
        .unwrap_or_else(|| GENERIC_UPSTREAM_ERROR.to_string());
    Err(AppError::Upstream { status, message })
}
