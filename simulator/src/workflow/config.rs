use anyhow::Context;
use ecgcore::prelude::RenderSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Viewer-facing render configuration, loadable from YAML. Absent keys keep
/// the core defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_samples: usize,
    pub plot_width_px: f32,
    pub amplitude_span: f32,
    pub trace_height_px: f32,
    pub reference_height_px: u32,
    pub lead_height_px: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        Self {
            window_samples: settings.window_samples,
            plot_width_px: settings.plot_width_px,
            amplitude_span: settings.amplitude_span,
            trace_height_px: settings.trace_height_px,
            reference_height_px: settings.reference_height_px,
            lead_height_px: settings.lead_height_px,
        }
    }
}

impl ViewerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading viewer config {}", path_ref.display()))?;
        let config: ViewerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing viewer config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(window_samples: usize, plot_width_px: f32, amplitude_span: f32) -> Self {
        Self {
            window_samples,
            plot_width_px,
            amplitude_span,
            ..Default::default()
        }
    }

    pub fn to_render_settings(&self) -> RenderSettings {
        RenderSettings {
            window_samples: self.window_samples,
            plot_width_px: self.plot_width_px,
            amplitude_span: self.amplitude_span,
            trace_height_px: self.trace_height_px,
            reference_height_px: self.reference_height_px,
            lead_height_px: self.lead_height_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_render_settings() {
        let config = ViewerConfig::from_args(200, 640.0, 2.0);
        let settings = config.to_render_settings();
        assert_eq!(settings.window_samples, 200);
        assert_eq!(settings.plot_width_px, 640.0);
        assert_eq!(settings.lead_height_px, 100);
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"window_samples: 300\nplot_width_px: 720.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.window_samples, 300);
        assert_eq!(config.reference_height_px, 120);
    }
}
