use std::f32::consts::PI;

/// Generates a plain sine trace for quick dummy leads.
#[allow(dead_code)]
pub fn sine_wave(length: usize, cycles: f32) -> Vec<f32> {
    (0..length)
        .map(|i| ((i as f32 * cycles) / length as f32 * 2.0 * PI).sin())
        .collect()
}
