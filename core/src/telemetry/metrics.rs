use std::sync::Mutex;

/// Counters for the presentation workflow: screens successfully derived
/// versus sessions rejected for missing required fields.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    derived: usize,
    rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                derived: 0,
                rejected: 0,
            }),
        }
    }

    pub fn record_derived(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.derived += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.derived, metrics.rejected)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
