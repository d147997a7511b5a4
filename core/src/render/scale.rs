use serde::{Deserialize, Serialize};

use crate::prelude::RenderSettings;

/// Display window applied to every lead: a display-time truncation that
/// bounds rendering cost, not a resampling.
pub const WINDOW_SAMPLES: usize = 400;

/// Pixel scales shared by every strip on one screen, so timing and amplitude
/// stay visually comparable across leads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SharedScale {
    pub px_per_sample: f32,
    pub px_per_unit: f32,
}

impl SharedScale {
    /// Derives the screen-wide scale from the longest truncated window and
    /// the fixed amplitude span. Computed once per screen, never per lead.
    pub fn derive(lead_lengths: &[usize], settings: &RenderSettings) -> Self {
        let max_window = lead_lengths
            .iter()
            .map(|&length| length.min(settings.window_samples))
            .max()
            .unwrap_or(0);
        let px_per_sample = settings.plot_width_px / max_window.max(1) as f32;
        let px_per_unit = settings.trace_height_px / settings.amplitude_span.max(f32::EPSILON);
        Self {
            px_per_sample,
            px_per_unit,
        }
    }
}
