//! Result-derivation and lead-rendering core for the Rust ECG viewer.
//!
//! The modules split the legacy results page into two pure components: the
//! result normalizer fills missing metrics with deterministic fallbacks, and
//! the lead renderer windows and scales the three waveform strips so they
//! stay visually comparable on one screen.

pub mod analysis;
pub mod math;
pub mod normalize;
pub mod prelude;
pub mod render;
pub mod telemetry;

pub use normalize::{derive_display_model, DisplayModel, RiskTier};
pub use prelude::{DeriveError, DeriveResult, RenderSettings};
pub use render::{render_lead, render_leads, RenderedStrip};
