use super::ledger::EarlyCompletionPolicy;
use super::queue::{GenerationGate, PredictionPolicy};
use super::summary::{AccuracyPolicy, DEFAULT_TOLERANCE_SECONDS};

/// Behavioural knobs for the café actor, fixed for its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSettings {
    pub gate: GenerationGate,
    pub prediction: PredictionPolicy,
    pub early_completions: EarlyCompletionPolicy,
    pub accuracy: AccuracyPolicy,
    /// Deviation at which an order scores zero accuracy.
    pub tolerance_seconds: f64,
    /// Whether generation is active before anyone calls `start`.
    pub start_operating: bool,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            gate: GenerationGate::default(),
            prediction: PredictionPolicy::default(),
            early_completions: EarlyCompletionPolicy::default(),
            accuracy: AccuracyPolicy::default(),
            tolerance_seconds: DEFAULT_TOLERANCE_SECONDS,
            start_operating: false,
        }
    }
}
