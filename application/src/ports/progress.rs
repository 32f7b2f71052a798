//! Progress notification port
//!
//! Defines the interface for reporting progress during an evaluation run.

/// Callback for progress updates during evaluation
///
/// Implementations live in the presentation layer.
pub trait EvaluationProgress: Send + Sync {
    /// Called once the dataset is parsed
    fn on_start(&self, total: usize);

    /// Called after each sample is recorded
    fn on_sample(&self, correct: usize, done: usize, is_correct: bool);

    /// Called after the metadata record is written
    fn on_finish(&self);

    /// Called when a dataset line is skipped
    fn on_skipped(&self, _line_number: usize, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl EvaluationProgress for NoProgress {
    fn on_start(&self, _total: usize) {}
    fn on_sample(&self, _correct: usize, _done: usize, _is_correct: bool) {}
    fn on_finish(&self) {}
}
