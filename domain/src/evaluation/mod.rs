//! Evaluation of classifier output against labeled data.
//!
//! Pure aggregation: the application layer reads datasets and results files
//! and feeds records into these accumulators.
//!
//! - [`single_label`] — accuracy with a per-truth-label breakdown
//! - [`multi_label`] — exact match, micro/macro P/R/F1 and confusion counts
//! - [`timing`] — prediction latency and throughput
//! - [`metadata`] — the run description written as the last results record
//! - [`summary`] — aggregate reports

pub mod metadata;
pub mod multi_label;
pub mod single_label;
pub mod summary;
pub mod timing;

pub use metadata::RunMetadata;
pub use multi_label::{ConfusionCounts, LabelMetrics, MultiLabelMetrics, MultiLabelSample, PrfScores};
pub use single_label::{IncorrectSample, LabelBreakdown, SingleLabelTally};
pub use summary::{EvaluationSummary, MultiLabelSummary};
pub use timing::TimingStats;

use crate::sdg::identifier::{NONE_SENTINEL, SdgId};

/// Reserved key of the metadata record in a results file.
pub const META_DATA_KEY: &str = "meta_data";

/// Prediction written for a sample whose classification failed.
pub const FAILURE_SENTINEL: &str = "error";

/// Number of incorrect predictions shown in a report.
pub const INCORRECT_SAMPLE_LIMIT: usize = 5;

/// Description prefix length (bytes) shown for incorrect predictions.
pub const DESCRIPTION_PREVIEW_BYTES: usize = 100;

/// Ordering for rendered labels: goals by number, then `None`, then any
/// other label alphabetically.
pub fn label_sort_key(label: &str) -> (u8, u32, String) {
    if let Ok(goal) = label.parse::<SdgId>() {
        return (0, goal.number(), String::new());
    }
    if label == NONE_SENTINEL {
        return (1, 0, String::new());
    }
    (2, 0, label.to_string())
}

/// Sort labels in place by [`label_sort_key`].
pub fn sort_labels(labels: &mut [String]) {
    labels.sort_by_cached_key(|l| label_sort_key(l));
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_sort_numerically() {
        let mut labels: Vec<String> = ["SDG10", "None", "SDG2", "other", "SDG1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_labels(&mut labels);
        assert_eq!(labels, vec!["SDG1", "SDG2", "SDG10", "None", "other"]);
    }

    #[test]
    fn test_ratio_zero_division() {
        assert_eq!(ratio(1.0, 0.0), 0.0);
        assert_eq!(ratio(1.0, 4.0), 0.25);
    }
}
