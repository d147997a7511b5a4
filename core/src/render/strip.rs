use serde::{Deserialize, Serialize};
use std::array;

use crate::math::stats::StatsHelper;
use crate::prelude::RenderSettings;
use crate::render::layout::{lead_layout, LeadConfig, Rgb};
use crate::render::scale::SharedScale;
use crate::telemetry::log::LogManager;

/// Drawable description of one lead strip. Rasterization belongs to the view
/// layer; the core only resolves window, color, height, grid flag, and scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedStrip {
    pub label: String,
    pub window: Vec<f32>,
    pub color: Rgb,
    pub height_px: u32,
    pub show_axis_grid: bool,
    pub scale: SharedScale,
}

impl RenderedStrip {
    pub fn point_count(&self) -> usize {
        self.window.len()
    }
}

/// Renders one lead: truncates to the configured window and attaches the
/// shared scale. An empty lead (disconnected electrode) yields a valid strip
/// with zero drawn points, never an error.
pub fn render_lead(
    samples: &[f32],
    config: &LeadConfig,
    scale: SharedScale,
    settings: &RenderSettings,
) -> RenderedStrip {
    let window: Vec<f32> = samples
        .iter()
        .take(settings.window_samples)
        .copied()
        .collect();

    LogManager::new("render").record(&format!(
        "lead {}: {} samples, RMS {:.4}, peak {:.4}",
        config.label,
        window.len(),
        StatsHelper::rms(&window),
        StatsHelper::peak(&window)
    ));

    RenderedStrip {
        label: config.label.clone(),
        window,
        color: config.color,
        height_px: config.height_px,
        show_axis_grid: config.show_axis_grid,
        scale,
    }
}

/// Renders the full three-lead screen: derives the shared scale once from
/// the lead lengths, builds the fixed layout, and renders each strip.
pub fn render_leads(leads: [&[f32]; 3], settings: &RenderSettings) -> [RenderedStrip; 3] {
    let lengths = [leads[0].len(), leads[1].len(), leads[2].len()];
    let scale = SharedScale::derive(&lengths, settings);
    let configs = lead_layout(settings);
    array::from_fn(|index| render_lead(leads[index], &configs[index], scale, settings))
}
