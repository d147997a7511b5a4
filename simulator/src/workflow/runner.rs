use crate::workflow::config::ViewerConfig;
use anyhow::Context;
use ecgcore::analysis::SessionPayload;
use ecgcore::normalize::{derive_display_model, DisplayModel};
use ecgcore::render::{render_leads, RenderedStrip};
use ecgcore::telemetry::MetricsRecorder;
use std::sync::Arc;

/// Everything the view layer needs for one screen.
pub struct WorkflowResult {
    pub display: DisplayModel,
    pub strips: [RenderedStrip; 3],
}

#[derive(Clone)]
pub struct Runner {
    config: ViewerConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    /// Runs one session through the core: derive the display model, then
    /// render the three strips against one shared scale. A session missing
    /// required fields is rejected whole; no partial screen is produced.
    pub fn execute(&self, session: &SessionPayload) -> anyhow::Result<WorkflowResult> {
        let settings = self.config.to_render_settings();

        let display = match derive_display_model(&session.result) {
            Ok(display) => display,
            Err(err) => {
                self.metrics.record_rejected();
                return Err(err).context("deriving display model");
            }
        };

        let strips = render_leads(
            [
                session.leads[0].as_slice(),
                session.leads[1].as_slice(),
                session.leads[2].as_slice(),
            ],
            &settings,
        );

        self.metrics.record_derived();
        Ok(WorkflowResult { display, strips })
    }

    pub fn metrics_snapshot(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_session;
    use ecgcore::analysis::AnalysisResult;
    use ecgcore::normalize::RiskTier;

    #[test]
    fn runner_executes_full_session() {
        let runner = Runner::new(ViewerConfig::default());
        let session = build_session(1000).unwrap();
        let result = runner.execute(&session).unwrap();
        assert_eq!(result.strips[0].point_count(), 400);
        assert_eq!(result.display.rhythm_label, "Normal");
        assert_eq!(runner.metrics_snapshot(), (1, 0));
    }

    #[test]
    fn runner_rejects_session_without_prediction() {
        let runner = Runner::new(ViewerConfig::default());
        let mut session = build_session(200).unwrap();
        session.result = AnalysisResult::default();
        assert!(runner.execute(&session).is_err());
        assert_eq!(runner.metrics_snapshot(), (0, 1));
    }

    #[test]
    fn runner_accepts_hand_built_leads() {
        use crate::generator::template::sine_wave;
        use ecgcore::analysis::SessionPayload;

        let runner = Runner::new(ViewerConfig::default());
        let session = SessionPayload::new(
            AnalysisResult::classified("Normal", 88.0),
            [sine_wave(1000, 8.0), sine_wave(400, 8.0), Vec::new()],
        );
        let result = runner.execute(&session).unwrap();
        assert_eq!(result.strips[0].point_count(), 400);
        assert_eq!(result.strips[2].point_count(), 0);
        assert_eq!(
            result.strips[0].scale.px_per_sample,
            result.strips[2].scale.px_per_sample
        );
    }

    #[test]
    fn explicit_risk_level_survives_the_workflow() {
        let runner = Runner::new(ViewerConfig::default());
        let mut session = build_session(200).unwrap();
        session.result.risk_level = Some("Medium Risk".into());
        let result = runner.execute(&session).unwrap();
        assert_eq!(result.display.risk_tier, RiskTier::Medium);
    }
}
