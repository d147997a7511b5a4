use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk tier shown on the assessment meter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Lenient parser for the analysis service's free-form `risk_level`
    /// strings ("Low Risk", "medium", "HIGH_RISK", ...). Anything that does
    /// not normalize to a known tier is treated as absent by the caller.
    pub fn parse(label: &str) -> Option<Self> {
        let letters: String = label
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect::<String>()
            .to_ascii_lowercase();
        let tier = letters.strip_suffix("risk").unwrap_or(&letters);
        match tier {
            "low" => Some(Self::Low),
            "medium" | "moderate" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Confidence fallback used when the service supplies no explicit tier.
    /// Only a Normal rhythm can earn a lower tier; thresholds are exclusive
    /// lower bounds, so ties at 80 and 50 fall to the stricter tier.
    pub fn from_confidence(prediction: &str, confidence: f64) -> Self {
        if prediction == "Normal" && confidence > 80.0 {
            Self::Low
        } else if prediction == "Normal" && confidence > 50.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_service_formats() {
        assert_eq!(RiskTier::parse("Low Risk"), Some(RiskTier::Low));
        assert_eq!(RiskTier::parse("medium"), Some(RiskTier::Medium));
        assert_eq!(RiskTier::parse("HIGH_RISK"), Some(RiskTier::High));
        assert_eq!(RiskTier::parse(" moderate "), Some(RiskTier::Medium));
        assert_eq!(RiskTier::parse("unknown tier"), None);
        assert_eq!(RiskTier::parse(""), None);
    }

    #[test]
    fn confidence_boundaries_are_exclusive() {
        assert_eq!(RiskTier::from_confidence("Normal", 80.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_confidence("Normal", 80.0001), RiskTier::Low);
        assert_eq!(RiskTier::from_confidence("Normal", 50.0), RiskTier::High);
        assert_eq!(RiskTier::from_confidence("Normal", 50.0001), RiskTier::Medium);
    }

    #[test]
    fn non_normal_prediction_is_always_high() {
        assert_eq!(
            RiskTier::from_confidence("Atrial Fibrillation", 99.9),
            RiskTier::High
        );
        assert_eq!(RiskTier::from_confidence("Noise", 10.0), RiskTier::High);
    }
}
