use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TumorCharacteristics {
    pub size_mm2: f64,
    pub circularity: f64,
    pub perimeter_mm: f64,
    pub dimensions_mm: Dimensions,
}

/// Answer of the model service. Unknown fields are kept so the browser sees
/// exactly what the model sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tumor_characteristics: Option<TumorCharacteristics>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamError {
    #[serde(default)]
    pub error: Option<String>,
    /// FastAPI-style services report failures under `detail`.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl UpstreamError {
    /// First non-blank human readable message in the body.
    pub fn message(&self) -> Option<String> {
        let detail = match &self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail.as_str()),
            _ => None,
        };
        self.error
            .as_deref()
            .into_iter()
            .chain(detail)
            .map(str::trim)
            .find(|message| !message.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prediction_without_tumor() {
        let prediction: Prediction =
            serde_json::from_value(json!({"prediction": "Benign", "confidence": 0.92})).unwrap();
        assert_eq!(prediction.prediction, "Benign");
        assert_eq!(prediction.confidence, Confidence::Score(0.92));
        assert!(prediction.tumor_characteristics.is_none());
    }

    #[test]
    fn extra_fields_survive() {
        let body = json!({
            "prediction": "Malignant",
            "confidence": "87%",
            "model_version": "2.1",
            "tumor_characteristics": {
                "size_mm2": 120.5,
                "circularity": 0.81,
                "perimeter_mm": 44.2,
                "dimensions_mm": {"width": 12.0, "height": 10.5}
            }
        });
        let prediction: Prediction = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(prediction.confidence, Confidence::Label("87%".into()));
        assert_eq!(serde_json::to_value(&prediction).unwrap(), body);
    }

    #[test]
    fn missing_prediction_is_rejected() {
        assert!(serde_json::from_value::<Prediction>(json!({"confidence": 0.5})).is_err());
    }

    #[test]
    fn upstream_message_prefers_error_then_detail() {
        let both: UpstreamError = serde_json::from_value(json!({"error": "bad image", "detail": "x"})).unwrap();
        assert_eq!(both.message().as_deref(), Some("bad image"));
        let detail: UpstreamError = serde_json::from_value(json!({"error": "  ", "detail": "Unsupported format"})).unwrap();
        assert_eq!(detail.message().as_deref(), Some("Unsupported format"));
        let structured: UpstreamError = serde_json::from_value(json!({"detail": [{"msg": "field required"}]})).unwrap();
        assert_eq!(structured.message(), None);
    }
}
