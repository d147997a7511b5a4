use serde::{Deserialize, Serialize};
use std::array;

use crate::prelude::RenderSettings;

/// Trace color as an 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-lead presentation: what the strip looks like, not what it contains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadConfig {
    pub label: String,
    pub color: Rgb,
    pub show_axis_grid: bool,
    pub height_px: u32,
}

pub const LEAD_LABELS: [&str; 3] = ["I", "II", "III"];

/// Builds the three strip configs. Lead I is the reference strip: it alone
/// carries the axis grid and the taller height. Fixed by position, never by
/// content.
pub fn lead_layout(settings: &RenderSettings) -> [LeadConfig; 3] {
    array::from_fn(|index| LeadConfig {
        label: LEAD_LABELS[index].to_string(),
        color: Rgb::BLACK,
        show_axis_grid: index == 0,
        height_px: if index == 0 {
            settings.reference_height_px
        } else {
            settings.lead_height_px
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_reference_lead_gets_the_grid() {
        let layout = lead_layout(&RenderSettings::default());
        let grids = layout.iter().filter(|config| config.show_axis_grid).count();
        assert_eq!(grids, 1);
        assert!(layout[0].show_axis_grid);
    }

    #[test]
    fn reference_lead_is_taller() {
        let settings = RenderSettings::default();
        let layout = lead_layout(&settings);
        assert_eq!(layout[0].height_px, settings.reference_height_px);
        assert_eq!(layout[1].height_px, settings.lead_height_px);
        assert_eq!(layout[2].height_px, settings.lead_height_px);
        assert_eq!(layout[1].label, "II");
    }
}
