//! Aggregate reports for single-label and multi-label runs.

use super::metadata::RunMetadata;
use super::multi_label::MultiLabelMetrics;
use super::single_label::{IncorrectSample, LabelBreakdown, SingleLabelTally};
use super::timing::TimingStats;
use serde::{Deserialize, Serialize};

/// Outcome of a single-label run or re-scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Samples whose classification failed (counted as incorrect)
    pub failed: usize,
    /// Dataset lines skipped as malformed
    pub skipped: usize,
    pub accuracy: f64,
    pub total_time: f64,
    pub average_prediction_time: f64,
    pub predictions_per_second: f64,
    pub breakdown: Vec<LabelBreakdown>,
    pub incorrect_samples: Vec<IncorrectSample>,
    pub metadata: RunMetadata,
}

impl EvaluationSummary {
    pub fn from_tally(
        tally: &SingleLabelTally,
        timing: TimingStats,
        failed: usize,
        skipped: usize,
        metadata: RunMetadata,
    ) -> Self {
        Self {
            total: tally.total(),
            correct: tally.correct(),
            incorrect: tally.incorrect(),
            failed,
            skipped,
            accuracy: tally.accuracy(),
            total_time: timing.total_seconds(),
            average_prediction_time: timing.average_seconds(),
            predictions_per_second: timing.predictions_per_second(),
            breakdown: tally.breakdown(),
            incorrect_samples: tally.incorrect_samples().to_vec(),
            metadata,
        }
    }
}

/// Outcome of multi-label re-scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLabelSummary {
    #[serde(flatten)]
    pub metrics: MultiLabelMetrics,
    pub total_time: f64,
    pub average_prediction_time: f64,
    pub predictions_per_second: f64,
    pub incorrect_samples: Vec<IncorrectSample>,
    pub metadata: RunMetadata,
}

impl MultiLabelSummary {
    pub fn new(
        metrics: MultiLabelMetrics,
        timing: TimingStats,
        incorrect_samples: Vec<IncorrectSample>,
        metadata: RunMetadata,
    ) -> Self {
        Self {
            metrics,
            total_time: timing.total_seconds(),
            average_prediction_time: timing.average_seconds(),
            predictions_per_second: timing.predictions_per_second(),
            incorrect_samples,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_tally() {
        let mut tally = SingleLabelTally::new();
        tally.record("SDG1", true);
        tally.record("SDG1", false);
        let mut timing = TimingStats::default();
        timing.record(0.5);
        timing.record(1.5);

        let summary = EvaluationSummary::from_tally(&tally, timing, 1, 2, RunMetadata::default());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.accuracy, 0.5);
        assert_eq!(summary.total_time, 2.0);
        assert_eq!(summary.average_prediction_time, 1.0);
        assert_eq!(summary.predictions_per_second, 1.0);
    }
}
