use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message used when the model service gives no usable reason of its own.
pub const GENERIC_UPSTREAM_ERROR: &str = "Failed to process image. Please try again later.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No image provided in the 'file' field")]
    MissingFile,
    #[error("Failed to process form data: {0}")]
    Multipart(String),
    #[error("Image exceeds the upload size limit")]
    TooLarge,
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("Prediction service unavailable")]
    UpstreamUnavailable,
    #[error("Prediction service returned an invalid response")]
    MalformedUpstream,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream { status, .. } => *status,
            AppError::UpstreamUnavailable | AppError::MalformedUpstream => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::TooLarge;
        }
        AppError::Multipart(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::warn!("Request rejected with {}: {}", status, self);
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(AppError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Multipart("bad boundary".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::TooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(AppError::UpstreamUnavailable.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::MalformedUpstream.status(), StatusCode::BAD_GATEWAY);
        let upstream = AppError::Upstream {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Image too small".into(),
        };
        assert_eq!(upstream.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(upstream.to_string(), "Image too small");
    }

    #[test]
    fn response_carries_status() {
        let response = AppError::MissingFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
