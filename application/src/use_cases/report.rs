//! Report use case
//!
//! Re-scores an existing results file without calling any classifier.
//! Predictions are re-extracted from the raw prediction field, so files
//! written by earlier tooling score the same way as fresh ones.

use super::shared;
use crate::ports::records::{DatasetError, RecordReader};
use sdg_domain::{
    EvaluationSummary, FAILURE_SENTINEL, INCORRECT_SAMPLE_LIMIT, IncorrectSample, MatchPolicy,
    META_DATA_KEY, MultiLabelMetrics, MultiLabelSample, MultiLabelSummary, RunMetadata, SdgList,
    SingleLabelTally, TimingStats, extract_sdgs_from_value,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("No scorable records in {0}")]
    NoRecords(PathBuf),
}

/// One data record of a results file
struct ScoredRecord {
    record: Map<String, Value>,
    truth: Value,
    predicted: SdgList,
    failed: bool,
    prediction_time: f64,
}

/// Parsed results file: data records plus the metadata record
struct ResultsFile {
    records: Vec<ScoredRecord>,
    metadata: RunMetadata,
}

/// Use case for re-scoring results files
pub struct ReportUseCase {
    reader: Arc<dyn RecordReader>,
    policy: MatchPolicy,
}

impl ReportUseCase {
    pub fn new(reader: Arc<dyn RecordReader>) -> Self {
        Self {
            reader,
            policy: MatchPolicy::Contains,
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Single-label accuracy with a per-label breakdown.
    pub fn single_label(&self, path: &Path) -> Result<EvaluationSummary, ReportError> {
        let file = self.load(path)?;

        let mut tally = SingleLabelTally::new();
        let mut timing = TimingStats::default();
        let mut failed = 0;
        let mut skipped = 0;

        for scored in &file.records {
            let Some(truth) = shared::truth_text(&scored.truth) else {
                skipped += 1;
                continue;
            };
            timing.record(scored.prediction_time);

            let is_correct = !scored.failed && self.policy.is_match(&scored.predicted, &truth);
            if scored.failed {
                failed += 1;
            }
            tally.record(&truth, is_correct);
            if !is_correct {
                let predicted = if scored.failed {
                    FAILURE_SENTINEL.to_string()
                } else {
                    scored.predicted.to_string()
                };
                tally.keep_incorrect(IncorrectSample::new(
                    shared::patent_number(&scored.record),
                    shared::description(&scored.record),
                    truth.as_str(),
                    predicted,
                ));
            }
        }

        if tally.total() == 0 {
            return Err(ReportError::NoRecords(path.to_path_buf()));
        }

        Ok(EvaluationSummary::from_tally(
            &tally,
            timing,
            failed,
            skipped,
            file.metadata,
        ))
    }

    /// Multi-label exact match, micro/macro metrics and confusion counts.
    ///
    /// An empty truth list counts as `{"None"}`. A failed prediction counts
    /// as predicting nothing, so it adds only false negatives.
    pub fn multi_label(&self, path: &Path) -> Result<MultiLabelSummary, ReportError> {
        let file = self.load(path)?;

        let mut samples = Vec::with_capacity(file.records.len());
        let mut timing = TimingStats::default();
        let mut incorrect = Vec::new();

        for scored in &file.records {
            let truth = extract_sdgs_from_value(&scored.truth);
            let sample = if scored.failed {
                MultiLabelSample::new(truth.labels(), Vec::<String>::new())
            } else {
                MultiLabelSample::from_lists(&truth, &scored.predicted)
            };
            timing.record(scored.prediction_time);

            if !sample.is_exact_match() && incorrect.len() < INCORRECT_SAMPLE_LIMIT {
                incorrect.push(IncorrectSample::new(
                    shared::patent_number(&scored.record),
                    shared::description(&scored.record),
                    join(&sample.truth),
                    join(&sample.predicted),
                ));
            }
            samples.push(sample);
        }

        if samples.is_empty() {
            return Err(ReportError::NoRecords(path.to_path_buf()));
        }

        let metrics = MultiLabelMetrics::compute(&samples);
        debug!(
            "Multi-label metrics over {} samples and {} labels",
            metrics.samples,
            metrics.per_label.len()
        );
        Ok(MultiLabelSummary::new(
            metrics,
            timing,
            incorrect,
            file.metadata,
        ))
    }

    fn load(&self, path: &Path) -> Result<ResultsFile, ReportError> {
        let lines = self.reader.read_lines(path)?;
        let mut records = Vec::with_capacity(lines.len());
        let mut metadata = RunMetadata::default();

        for line in lines {
            let record = match line.text().and_then(shared::parse_object) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping line {} of {}: {}", line.line_number, path.display(), e);
                    continue;
                }
            };

            if let Some(meta) = record.get(META_DATA_KEY) {
                match serde_json::from_value::<RunMetadata>(meta.clone()) {
                    Ok(parsed) => metadata = parsed,
                    Err(e) => warn!("Unreadable metadata record: {}", e),
                }
                continue;
            }

            let Some(truth) = shared::truth_value(&record).cloned() else {
                debug!("Line {} has no truth label, ignored", line.line_number);
                continue;
            };

            let raw_prediction = shared::PREDICTION_FIELDS
                .iter()
                .find_map(|field| record.get(*field))
                .cloned()
                .unwrap_or(Value::Null);
            let failed = raw_prediction.as_str() == Some(FAILURE_SENTINEL);
            let predicted = extract_sdgs_from_value(&raw_prediction);
            let prediction_time = record
                .get("prediction_time")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);

            records.push(ScoredRecord {
                record,
                truth,
                predicted,
                failed,
                prediction_time,
            });
        }

        Ok(ResultsFile { records, metadata })
    }
}

fn join(labels: &std::collections::BTreeSet<String>) -> String {
    let mut sorted: Vec<String> = labels.iter().cloned().collect();
    sdg_domain::evaluation::sort_labels(&mut sorted);
    sorted.join(", ")
}
