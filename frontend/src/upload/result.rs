use std::fmt;

use serde::Deserialize;

use super::error::UploadError;
use crate::i18n::analysis::AnalysisText;

/// Shown whenever the server gives no usable message of its own.
pub const GENERIC_ERROR: &str = "Failed to process image. Please try again later.";

/// The model reports confidence either as a score or as a preformatted label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Label(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(score) => write!(f, "{}", score),
            Confidence::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TumorCharacteristics {
    pub size_mm2: f64,
    pub circularity: f64,
    pub perimeter_mm: f64,
    pub dimensions_mm: Dimensions,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub tumor_characteristics: Option<TumorCharacteristics>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// A labelled value on the result panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultField {
    pub label: &'static str,
    pub value: String,
}

impl Prediction {
    /// Cards in the top row: diagnosis and confidence always, tumor size and
    /// circularity only when the model measured a tumor.
    pub fn summary_fields(&self, text: &AnalysisText) -> Vec<ResultField> {
        let mut fields = vec![ResultField {
            label: text.diagnosis_label,
            value: self.prediction.clone(),
        }];
        if let Some(tumor) = &self.tumor_characteristics {
            fields.push(ResultField {
                label: text.tumor_size_label,
                value: format!("{} mm²", tumor.size_mm2),
            });
        }
        fields.push(ResultField {
            label: text.confidence_label,
            value: self.confidence.to_string(),
        });
        if let Some(tumor) = &self.tumor_characteristics {
            fields.push(ResultField {
                label: text.circularity_label,
                value: tumor.circularity.to_string(),
            });
        }
        fields
    }

    /// Lines of the "additional measurements" panel; empty without a tumor.
    pub fn measurement_fields(&self, text: &AnalysisText) -> Vec<ResultField> {
        let Some(tumor) = &self.tumor_characteristics else {
            return Vec::new();
        };
        vec![
            ResultField {
                label: text.perimeter_label,
                value: format!("{} mm", tumor.perimeter_mm),
            },
            ResultField {
                label: text.width_label,
                value: format!("{} mm", tumor.dimensions_mm.width),
            },
            ResultField {
                label: text.height_label,
                value: format!("{} mm", tumor.dimensions_mm.height),
            },
        ]
    }
}

/// Outcome of one completed analysis request.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisResult {
    Success(Prediction),
    Failure { error: String },
}

impl AnalysisResult {
    pub fn failure(error: impl Into<String>) -> Self {
        AnalysisResult::Failure { error: error.into() }
    }

    /// Interprets a finished HTTP exchange. Never fails: anything that is not
    /// a well-formed prediction from a 2xx response becomes a `Failure`,
    /// carrying the server's `error` message when it sent one.
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            match serde_json::from_str::<Prediction>(body) {
                Ok(prediction) => return AnalysisResult::Success(prediction),
                Err(e) => log::warn!("Unexpected prediction payload: {}", e),
            }
        } else {
            log::warn!("Prediction endpoint answered with status {}", status);
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty());
        match message {
            Some(message) => AnalysisResult::failure(message),
            None => AnalysisResult::failure(GENERIC_ERROR),
        }
    }

    pub fn from_transport(error: &UploadError) -> Self {
        log::error!("Error uploading image: {}", error);
        AnalysisResult::failure(GENERIC_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::analysis::ANALYSIS;

    const WITH_TUMOR: &str = r#"{
        "prediction": "Malignant",
        "confidence": 0.87,
        "tumor_characteristics": {
            "size_mm2": 152.4,
            "circularity": 0.71,
            "perimeter_mm": 48.2,
            "dimensions_mm": { "width": 14.5, "height": 11.0 }
        }
    }"#;

    #[test]
    fn success_without_tumor() {
        let result = AnalysisResult::from_response(200, r#"{"prediction":"Benign","confidence":0.92}"#);
        let AnalysisResult::Success(prediction) = result else {
            panic!("expected success");
        };
        assert_eq!(prediction.prediction, "Benign");
        assert_eq!(prediction.confidence.to_string(), "0.92");
        assert!(prediction.tumor_characteristics.is_none());

        let text = ANALYSIS.text("en");
        let labels: Vec<&str> = prediction.summary_fields(text).iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Diagnosis", "Confidence"]);
        assert!(prediction.measurement_fields(text).is_empty());
    }

    #[test]
    fn success_with_tumor_renders_all_measurements() {
        let AnalysisResult::Success(prediction) = AnalysisResult::from_response(200, WITH_TUMOR) else {
            panic!("expected success");
        };
        let text = ANALYSIS.text("en");

        let summary = prediction.summary_fields(text);
        assert_eq!(
            summary,
            vec![
                ResultField { label: "Diagnosis", value: "Malignant".into() },
                ResultField { label: "Tumor Size", value: "152.4 mm²".into() },
                ResultField { label: "Confidence", value: "0.87".into() },
                ResultField { label: "Circularity", value: "0.71".into() },
            ]
        );

        let measurements = prediction.measurement_fields(text);
        let values: Vec<&str> = measurements.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, ["48.2 mm", "14.5 mm", "11 mm"]);
    }

    #[test]
    fn confidence_may_be_a_string() {
        let AnalysisResult::Success(prediction) =
            AnalysisResult::from_response(201, r#"{"prediction":"Benign","confidence":"92%"}"#)
        else {
            panic!("expected success");
        };
        assert_eq!(prediction.confidence, Confidence::Label("92%".into()));
        assert_eq!(prediction.confidence.to_string(), "92%");
    }

    #[test]
    fn server_error_message_is_used_verbatim() {
        let result = AnalysisResult::from_response(422, r#"{"error":"Image too small"}"#);
        assert_eq!(result, AnalysisResult::failure("Image too small"));
    }

    #[test]
    fn missing_or_blank_error_falls_back() {
        assert_eq!(AnalysisResult::from_response(500, "Internal Server Error"), AnalysisResult::failure(GENERIC_ERROR));
        assert_eq!(AnalysisResult::from_response(500, "{}"), AnalysisResult::failure(GENERIC_ERROR));
        assert_eq!(AnalysisResult::from_response(503, r#"{"error":"  "}"#), AnalysisResult::failure(GENERIC_ERROR));
    }

    #[test]
    fn malformed_success_body_is_a_failure() {
        assert_eq!(AnalysisResult::from_response(200, "not json"), AnalysisResult::failure(GENERIC_ERROR));
        assert_eq!(
            AnalysisResult::from_response(200, r#"{"error":"model not loaded"}"#),
            AnalysisResult::failure("model not loaded")
        );
    }

    #[test]
    fn transport_failures_use_generic_message() {
        assert_eq!(AnalysisResult::from_transport(&UploadError::Network), AnalysisResult::failure(GENERIC_ERROR));
    }
}
