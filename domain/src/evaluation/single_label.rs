//! Single-label accuracy tally.

use super::{DESCRIPTION_PREVIEW_BYTES, INCORRECT_SAMPLE_LIMIT, label_sort_key, ratio};
use crate::util::truncate_str;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accuracy for one truth label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBreakdown {
    pub label: String,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
}

/// An incorrect prediction kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectSample {
    pub patent_number: Option<String>,
    /// First [`DESCRIPTION_PREVIEW_BYTES`] bytes of the description
    pub description: String,
    pub true_label: String,
    pub predicted: String,
}

impl IncorrectSample {
    pub fn new(
        patent_number: Option<String>,
        description: &str,
        true_label: impl Into<String>,
        predicted: impl Into<String>,
    ) -> Self {
        Self {
            patent_number,
            description: truncate_str(description, DESCRIPTION_PREVIEW_BYTES).to_string(),
            true_label: true_label.into(),
            predicted: predicted.into(),
        }
    }
}

/// Running correct/total counts, overall and per truth label.
#[derive(Debug, Clone, Default)]
pub struct SingleLabelTally {
    correct: usize,
    total: usize,
    per_label: HashMap<String, (usize, usize)>,
    incorrect_samples: Vec<IncorrectSample>,
}

impl SingleLabelTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, true_label: &str, is_correct: bool) {
        self.total += 1;
        let entry = self.per_label.entry(true_label.to_string()).or_default();
        entry.1 += 1;
        if is_correct {
            self.correct += 1;
            entry.0 += 1;
        }
    }

    /// Keep an incorrect prediction for display; only the first few are kept.
    pub fn keep_incorrect(&mut self, sample: IncorrectSample) {
        if self.incorrect_samples.len() < INCORRECT_SAMPLE_LIMIT {
            self.incorrect_samples.push(sample);
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.correct as f64, self.total as f64)
    }

    pub fn incorrect_samples(&self) -> &[IncorrectSample] {
        &self.incorrect_samples
    }

    /// Per-label accuracy ordered by goal number.
    pub fn breakdown(&self) -> Vec<LabelBreakdown> {
        let mut rows: Vec<LabelBreakdown> = self
            .per_label
            .iter()
            .map(|(label, &(correct, total))| LabelBreakdown {
                label: label.clone(),
                correct,
                total,
                accuracy: ratio(correct as f64, total as f64),
            })
            .collect();
        rows.sort_by_cached_key(|row| label_sort_key(&row.label));
        rows
    }
}
