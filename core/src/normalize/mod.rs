pub mod display;
pub mod risk;

pub use display::{derive_display_model, DisplayModel, FALLBACK_BPM};
pub use risk::RiskTier;
