use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::api::prediction::{UploadedImage, FILE_FIELD};
use crate::error::AppError;
use crate::models::prediction_models::Prediction;
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Reads the `file` field of a multipart upload. Other fields are skipped.
pub async fn read_image(multipart: &mut Multipart) -> Result<UploadedImage, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::MissingFile);
        }
        return Ok(UploadedImage {
            file_name,
            content_type,
            data,
        });
    }
    Err(AppError::MissingFile)
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Prediction>, AppError> {
    let image = read_image(&mut multipart).await?;
    tracing::info!(
        "Received {} ({}, {} bytes)",
        image.file_name,
        image.content_type.as_deref().unwrap_or("unknown type"),
        image.data.len()
    );
    let prediction = state.prediction_client.predict(image).await?;
    tracing::info!("Prediction: {}", prediction.prediction);
    Ok(Json(prediction))
}
