use serde::{Deserialize, Serialize};

use crate::render::scale::WINDOW_SAMPLES;

/// Shared render configuration for one screen; every lead on that screen is
/// rendered against the same instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    pub window_samples: usize,
    pub plot_width_px: f32,
    /// Full vertical span, in amplitude units, the trace may occupy.
    pub amplitude_span: f32,
    pub trace_height_px: f32,
    pub reference_height_px: u32,
    pub lead_height_px: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            window_samples: WINDOW_SAMPLES,
            plot_width_px: 800.0,
            amplitude_span: 4.0,
            trace_height_px: 80.0,
            reference_height_px: 120,
            lead_height_px: 100,
        }
    }
}

/// Common error type for display-model derivation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("required field `{0}` missing from analysis result")]
    MissingField(&'static str),
}

pub type DeriveResult<T> = Result<T, DeriveError>;
