use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::normalize::risk::RiskTier;
use crate::prelude::{DeriveError, DeriveResult};
use crate::telemetry::log::LogManager;

/// Heart rate shown when neither `bpm` nor `heart_rate` is reported. A
/// neutral placeholder, not a measurement.
pub const FALLBACK_BPM: u32 = 72;

/// Fully populated screen metrics derived from one `AnalysisResult`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayModel {
    pub heart_rate_bpm: u32,
    pub rhythm_label: String,
    pub quality_percent: u8,
    pub risk_tier: RiskTier,
}

/// Derives the display model, filling optional fields with their documented
/// fallbacks. Pure: never mutates the input, never retries. Fails only when
/// `prediction` or `confidence` is absent; an unlabeled rhythm must not be
/// displayed as if classified.
pub fn derive_display_model(result: &AnalysisResult) -> DeriveResult<DisplayModel> {
    let rhythm_label = result
        .prediction
        .clone()
        .ok_or(DeriveError::MissingField("prediction"))?;
    let confidence = result
        .confidence
        .ok_or(DeriveError::MissingField("confidence"))?;

    // First present source wins; no averaging, no range validation.
    let heart_rate_bpm = result
        .bpm
        .or(result.heart_rate)
        .map(|value| value.round() as u32)
        .unwrap_or(FALLBACK_BPM);

    // An explicit tier from the service always beats the confidence rule.
    let risk_tier = result
        .risk_level
        .as_deref()
        .and_then(RiskTier::parse)
        .unwrap_or_else(|| RiskTier::from_confidence(&rhythm_label, confidence));

    let model = DisplayModel {
        heart_rate_bpm,
        rhythm_label,
        quality_percent: confidence.round() as u8,
        risk_tier,
    };

    LogManager::new("normalize").record(&format!(
        "derived screen metrics: {} bpm, quality {}%, {}",
        model.heart_rate_bpm, model.quality_percent, model.risk_tier
    ));

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bpm_wins_over_heart_rate() {
        let mut result = AnalysisResult::classified("Normal", 95.0);
        result.bpm = Some(68.4);
        result.heart_rate = Some(110.0);
        let model = derive_display_model(&result).unwrap();
        assert_eq!(model.heart_rate_bpm, 68);
    }

    #[test]
    fn heart_rate_used_when_bpm_absent() {
        let mut result = AnalysisResult::classified("Normal", 95.0);
        result.heart_rate = Some(81.6);
        let model = derive_display_model(&result).unwrap();
        assert_eq!(model.heart_rate_bpm, 82);
    }

    #[test]
    fn fallback_bpm_when_neither_source_present() {
        let result = AnalysisResult::classified("Normal", 95.0);
        let model = derive_display_model(&result).unwrap();
        assert_eq!(model.heart_rate_bpm, FALLBACK_BPM);
    }

    #[test]
    fn quality_is_rounded_confidence() {
        let model = derive_display_model(&AnalysisResult::classified("Normal", 87.5)).unwrap();
        assert_eq!(model.quality_percent, 88);
    }

    #[test]
    fn rhythm_label_is_verbatim_prediction() {
        let model =
            derive_display_model(&AnalysisResult::classified("Atrial Fibrillation", 64.0)).unwrap();
        assert_eq!(model.rhythm_label, "Atrial Fibrillation");
        assert_eq!(model.risk_tier, RiskTier::High);
    }

    #[test]
    fn explicit_risk_level_beats_confidence_rule() {
        let mut result = AnalysisResult::classified("Normal", 99.0);
        result.risk_level = Some("High Risk".into());
        let model = derive_display_model(&result).unwrap();
        assert_eq!(model.risk_tier, RiskTier::High);

        let mut result = AnalysisResult::classified("Ventricular Tachycardia", 20.0);
        result.risk_level = Some("low".into());
        let model = derive_display_model(&result).unwrap();
        assert_eq!(model.risk_tier, RiskTier::Low);
    }

    #[test]
    fn garbled_risk_level_falls_through_to_confidence_rule() {
        let mut result = AnalysisResult::classified("Normal", 90.0);
        result.risk_level = Some("???".into());
        let model = derive_display_model(&result).unwrap();
        assert_eq!(model.risk_tier, RiskTier::Low);
    }

    #[test]
    fn tier_boundaries_fall_to_stricter_tier() {
        let tier = |confidence: f64| {
            derive_display_model(&AnalysisResult::classified("Normal", confidence))
                .unwrap()
                .risk_tier
        };
        assert_eq!(tier(80.0), RiskTier::Medium);
        assert_eq!(tier(80.0001), RiskTier::Low);
        assert_eq!(tier(50.0), RiskTier::High);
        assert_eq!(tier(50.0001), RiskTier::Medium);
    }

    #[test]
    fn missing_prediction_raises() {
        let result = AnalysisResult {
            confidence: Some(90.0),
            ..Default::default()
        };
        assert_eq!(
            derive_display_model(&result),
            Err(DeriveError::MissingField("prediction"))
        );
    }

    #[test]
    fn missing_confidence_raises() {
        let result = AnalysisResult {
            prediction: Some("Normal".into()),
            ..Default::default()
        };
        assert_eq!(
            derive_display_model(&result),
            Err(DeriveError::MissingField("confidence"))
        );
    }
}
