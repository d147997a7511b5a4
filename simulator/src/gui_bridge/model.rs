use crate::workflow::runner::WorkflowResult;
use ecgcore::analysis::AnalysisResult;
use ecgcore::normalize::DisplayModel;
use ecgcore::render::RenderedStrip;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Serializable screen state served to the visualizer. `display` stays
/// `None` until the first valid session arrives; the viewer shows its
/// "no result yet" placeholder in that state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScreenModel {
    pub display: Option<DisplayModel>,
    pub strips: Vec<RenderedStrip>,
    pub notes: Vec<String>,
}

impl ScreenModel {
    /// Builds the published screen from a workflow result, folding the
    /// optional diagnostic metadata into human-readable note lines.
    pub fn from_workflow(result: &WorkflowResult, source: &AnalysisResult) -> Self {
        let mut notes = Vec::new();
        if let Some(seconds) = source.processing_time {
            notes.push(format!("Processing time {:.2} s", seconds));
        }
        if let Some(timestamp) = source.timestamp {
            notes.push(format!("Analysis timestamp {:.0}", timestamp));
        }
        if let Some(probabilities) = &source.probabilities {
            let mut entries: Vec<_> = probabilities.iter().collect();
            entries.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(Ordering::Equal));
            for (class, mass) in entries {
                notes.push(format!("{}: {:.2}%", class, mass * 100.0));
            }
        }

        Self {
            display: Some(result.display.clone()),
            strips: result.strips.to_vec(),
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_session;
    use crate::workflow::config::ViewerConfig;
    use crate::workflow::runner::Runner;

    #[test]
    fn probabilities_are_listed_highest_first() {
        let runner = Runner::new(ViewerConfig::default());
        let session = build_session(500).unwrap();
        let result = runner.execute(&session).unwrap();
        let model = ScreenModel::from_workflow(&result, &session.result);

        assert!(model.display.is_some());
        assert_eq!(model.strips.len(), 3);
        // Default session is 93% Normal, so Normal leads the note list after
        // the processing-time line.
        assert!(model.notes[1].starts_with("Normal"));
    }
}
