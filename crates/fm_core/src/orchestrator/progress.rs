use serde::{Deserialize, Serialize};

/// Progress of a single day advance, for progress-bar display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationProgress {
    /// Monotonic within one day, 0.0..=1.0
    pub fraction: f64,
    pub label: String,
}

pub trait ProgressSink {
    fn report(&mut self, progress: SimulationProgress);
}

impl<F> ProgressSink for F
where
    F: FnMut(SimulationProgress),
{
    fn report(&mut self, progress: SimulationProgress) {
        self(progress)
    }
}

/// Sink that drops every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: SimulationProgress) {}
}

pub(crate) fn emit(sink: &mut impl ProgressSink, fraction: f64, label: impl Into<String>) {
    sink.report(SimulationProgress {
        fraction: fraction.clamp(0.0, 1.0),
        label: label.into(),
    });
}
