use serde::{Deserialize, Serialize};

use crate::analysis::result::AnalysisResult;

/// Number of leads a session always carries.
pub const LEAD_COUNT: usize = 3;

/// One complete measurement handed across the input boundary: the analysis
/// outcome plus the three raw lead waveforms, pre-scaled upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPayload {
    pub result: AnalysisResult,
    pub leads: [Vec<f32>; LEAD_COUNT],
}

impl SessionPayload {
    pub fn new(result: AnalysisResult, leads: [Vec<f32>; LEAD_COUNT]) -> Self {
        Self { result, leads }
    }

    pub fn lead_lengths(&self) -> [usize; LEAD_COUNT] {
        [self.leads[0].len(), self.leads[1].len(), self.leads[2].len()]
    }
}
