use thiserror::Error;

/// Failures of the upload transport itself. Server answers (any status) are
/// not errors at this level; they are interpreted by `AnalysisResult`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Browser API call failed: {0}")]
    Js(String),
    #[error("Network error while uploading")]
    Network,
    #[error("Upload timed out")]
    Timeout,
    #[error("Upload aborted")]
    Aborted,
}

impl From<wasm_bindgen::JsValue> for UploadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        UploadError::Js(format!("{:?}", value))
    }
}
