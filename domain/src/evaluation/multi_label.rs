//! Set-based multi-label metrics.
//!
//! Computation runs in two passes. The first collects the label universe
//! over every true and predicted set. The second projects each sample onto
//! the universe (sorted by goal number) and counts TP/FP/FN per label.
//! Zero-division cases score 0.

use super::{label_sort_key, ratio};
use crate::sdg::identifier::SdgList;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Per-label confusion counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    pub fn precision(&self) -> f64 {
        ratio(self.tp as f64, (self.tp + self.fp) as f64)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.tp as f64, (self.tp + self.fn_) as f64)
    }

    pub fn f1(&self) -> f64 {
        ratio(
            2.0 * self.tp as f64,
            (2 * self.tp + self.fp + self.fn_) as f64,
        )
    }

    fn add(&mut self, other: ConfusionCounts) {
        self.tp += other.tp;
        self.fp += other.fp;
        self.fn_ += other.fn_;
    }
}

/// Precision, recall and F1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrfScores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Metrics for one label of the universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    pub label: String,
    #[serde(flatten)]
    pub counts: ConfusionCounts,
    /// Recall-style accuracy: TP / (TP + FN)
    pub accuracy: f64,
}

/// True and predicted label sets of one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLabelSample {
    pub truth: BTreeSet<String>,
    pub predicted: BTreeSet<String>,
}

impl MultiLabelSample {
    pub fn new<T, P>(truth: T, predicted: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            truth: truth.into_iter().map(Into::into).collect(),
            predicted: predicted.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from canonical lists. An empty list becomes `{"None"}`.
    pub fn from_lists(truth: &SdgList, predicted: &SdgList) -> Self {
        Self::new(truth.labels(), predicted.labels())
    }

    pub fn is_exact_match(&self) -> bool {
        self.truth == self.predicted
    }
}

/// Aggregate multi-label metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLabelMetrics {
    pub samples: usize,
    pub exact_matches: usize,
    pub exact_match_ratio: f64,
    pub micro: PrfScores,
    #[serde(rename = "macro")]
    pub macro_avg: PrfScores,
    pub per_label: Vec<LabelMetrics>,
}

impl MultiLabelMetrics {
    pub fn compute(samples: &[MultiLabelSample]) -> Self {
        let mut universe: Vec<String> = samples
            .iter()
            .flat_map(|s| s.truth.iter().chain(s.predicted.iter()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        universe.sort_by_cached_key(|l| label_sort_key(l));

        let mut counts: HashMap<&str, ConfusionCounts> = HashMap::new();
        let mut exact_matches = 0;
        for sample in samples {
            if sample.is_exact_match() {
                exact_matches += 1;
            }
            for label in &universe {
                let in_truth = sample.truth.contains(label);
                let in_pred = sample.predicted.contains(label);
                let entry = counts.entry(label.as_str()).or_default();
                match (in_truth, in_pred) {
                    (true, true) => entry.tp += 1,
                    (false, true) => entry.fp += 1,
                    (true, false) => entry.fn_ += 1,
                    (false, false) => {}
                }
            }
        }

        let per_label: Vec<LabelMetrics> = universe
            .iter()
            .map(|label| {
                let c = counts.get(label.as_str()).copied().unwrap_or_default();
                LabelMetrics {
                    label: label.clone(),
                    counts: c,
                    accuracy: c.recall(),
                }
            })
            .collect();

        let mut total = ConfusionCounts::default();
        for row in &per_label {
            total.add(row.counts);
        }
        let micro = PrfScores {
            precision: total.precision(),
            recall: total.recall(),
            f1: total.f1(),
        };

        let n = per_label.len() as f64;
        let macro_avg = PrfScores {
            precision: ratio(per_label.iter().map(|r| r.counts.precision()).sum(), n),
            recall: ratio(per_label.iter().map(|r| r.counts.recall()).sum(), n),
            f1: ratio(per_label.iter().map(|r| r.counts.f1()).sum(), n),
        };

        Self {
            samples: samples.len(),
            exact_matches,
            exact_match_ratio: ratio(exact_matches as f64, samples.len() as f64),
            micro,
            macro_avg,
            per_label,
        }
    }

    pub fn label(&self, label: &str) -> Option<&LabelMetrics> {
        self.per_label.iter().find(|m| m.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn two_thirds() -> f64 {
        2.0 / 3.0
    }

    // ==================== Reference example ====================

    #[test]
    fn test_reference_example_counts_and_averages() {
        let samples = vec![
            MultiLabelSample::new(["SDG1", "SDG3"], ["SDG1"]),
            MultiLabelSample::new(["SDG7"], ["SDG7", "SDG3"]),
        ];
        let m = MultiLabelMetrics::compute(&samples);

        assert_eq!(m.samples, 2);
        assert_eq!(m.exact_matches, 0);
        assert_eq!(m.exact_match_ratio, 0.0);

        let labels: Vec<_> = m.per_label.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["SDG1", "SDG3", "SDG7"]);

        let sdg3 = m.label("SDG3").unwrap();
        assert_eq!(sdg3.counts, ConfusionCounts { tp: 0, fp: 1, fn_: 1 });
        assert_eq!(sdg3.accuracy, 0.0);
        assert_eq!(m.label("SDG1").unwrap().counts.tp, 1);
        assert_eq!(m.label("SDG7").unwrap().accuracy, 1.0);

        assert!((m.micro.precision - two_thirds()).abs() < EPS);
        assert!((m.micro.recall - two_thirds()).abs() < EPS);
        assert!((m.micro.f1 - two_thirds()).abs() < EPS);
        assert!((m.macro_avg.precision - two_thirds()).abs() < EPS);
        assert!((m.macro_avg.recall - two_thirds()).abs() < EPS);
        assert!((m.macro_avg.f1 - two_thirds()).abs() < EPS);
    }

    #[test]
    fn test_half_exact_match() {
        let samples = vec![
            MultiLabelSample::new(["SDG1", "SDG3"], ["SDG1"]),
            MultiLabelSample::new(["SDG7"], ["SDG7"]),
        ];
        let m = MultiLabelMetrics::compute(&samples);
        assert_eq!(m.exact_match_ratio, 0.5);
        // TP=2 FP=0 FN=1
        assert_eq!(m.micro.precision, 1.0);
        assert!((m.micro.recall - two_thirds()).abs() < EPS);
        assert!((m.micro.f1 - 0.8).abs() < EPS);
    }

    // ==================== Edge cases ====================

    #[test]
    fn test_macro_differs_from_micro() {
        // SDG2: TP=1; SDG5: FP=3
        let samples = vec![
            MultiLabelSample::new(["SDG2"], ["SDG2", "SDG5"]),
            MultiLabelSample::new(["None"], ["SDG5"]),
            MultiLabelSample::new(["None"], ["SDG5"]),
        ];
        let m = MultiLabelMetrics::compute(&samples);
        let labels: Vec<_> = m.per_label.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["SDG2", "SDG5", "None"]);

        // Totals: TP=1 FP=3 FN=2 (None missed twice)
        assert!((m.micro.precision - 0.25).abs() < EPS);
        assert!((m.micro.recall - 1.0 / 3.0).abs() < EPS);
        // Per-label precision: SDG2 1, SDG5 0, None 0
        assert!((m.macro_avg.precision - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_from_lists_uses_none_sentinel() {
        let sample = MultiLabelSample::from_lists(&SdgList::none(), &SdgList::none());
        assert!(sample.truth.contains("None"));
        assert!(sample.is_exact_match());
    }

    #[test]
    fn test_no_samples() {
        let m = MultiLabelMetrics::compute(&[]);
        assert_eq!(m.samples, 0);
        assert_eq!(m.exact_match_ratio, 0.0);
        assert_eq!(m.micro, PrfScores::default());
        assert!(m.per_label.is_empty());
    }

    #[test]
    fn test_counts_serialize_with_fn_key() {
        let json = serde_json::to_value(ConfusionCounts { tp: 1, fp: 2, fn_: 3 }).unwrap();
        assert_eq!(json["fn"], 3);
    }
}
