use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw classification outcome produced by the external analysis service.
///
/// Every field except `prediction` and `confidence` may legitimately be
/// absent; the normalizer owns the fallback rules. The struct is read-only
/// to the core once received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub prediction: Option<String>,
    /// Percentage confidence in `prediction`, in [0, 100].
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    /// Pre-computed risk tier from the analysis service, free-form text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    /// Per-class probability mass; values assumed to sum to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectrogram_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

impl AnalysisResult {
    /// Minimal well-formed result: a classified rhythm with its confidence.
    pub fn classified(prediction: impl Into<String>, confidence: f64) -> Self {
        Self {
            prediction: Some(prediction.into()),
            confidence: Some(confidence),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_json_fields_deserialize_to_none() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"prediction": "Normal", "confidence": 91.5}"#).unwrap();
        assert_eq!(result.prediction.as_deref(), Some("Normal"));
        assert_eq!(result.confidence, Some(91.5));
        assert!(result.bpm.is_none());
        assert!(result.risk_level.is_none());
        assert!(result.probabilities.is_none());
    }

    #[test]
    fn optional_none_fields_are_omitted_on_serialize() {
        let encoded = serde_json::to_string(&AnalysisResult::classified("Normal", 90.0)).unwrap();
        assert!(!encoded.contains("bpm"));
        assert!(!encoded.contains("spectrogram_base64"));
    }
}
