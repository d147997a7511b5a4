pub mod layout;
pub mod scale;
pub mod strip;

pub use layout::{lead_layout, LeadConfig, Rgb};
pub use scale::{SharedScale, WINDOW_SAMPLES};
pub use strip::{render_lead, render_leads, RenderedStrip};
