//! Run Evaluation use case
//!
//! Replays a labeled JSONL dataset through a classifier and writes one
//! enriched record per sample, followed by the run metadata record.
//!
//! Samples are classified by a bounded pool of in-flight futures. Completed
//! results are consumed at a single point that writes the record, updates
//! the tallies and reports progress, so output order may differ from input
//! order when `concurrency > 1`.

use super::shared::{self, DESCRIPTION_FIELD, LABEL_FIELD, TRUE_LABEL_FIELD};
use crate::classifiers::{ClassificationError, Prediction, SdgClassifier};
use crate::config::EvaluationParams;
use crate::ports::progress::{EvaluationProgress, NoProgress};
use crate::ports::records::{DatasetError, RecordReader, RecordWriter};
use futures::stream::{self, StreamExt};
use sdg_domain::{
    EvaluationSummary, FAILURE_SENTINEL, IncorrectSample, META_DATA_KEY, RunMetadata,
    SingleLabelTally, TimingStats,
};
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort an evaluation run
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("No valid samples in {0}")]
    EmptyDataset(PathBuf),
}

/// Input for the RunEvaluation use case
#[derive(Debug, Clone)]
pub struct RunEvaluationInput {
    pub dataset: PathBuf,
}

impl RunEvaluationInput {
    pub fn new(dataset: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
        }
    }
}

/// A dataset line ready for classification
struct PendingSample {
    line_number: usize,
    record: Map<String, Value>,
    description: String,
    truth: String,
}

type Outcome = (PendingSample, Result<Prediction, ClassificationError>, Duration);

/// Use case for evaluating a classifier on a dataset
pub struct RunEvaluationUseCase {
    classifier: Arc<dyn SdgClassifier>,
    reader: Arc<dyn RecordReader>,
    params: EvaluationParams,
}

impl RunEvaluationUseCase {
    pub fn new(
        classifier: Arc<dyn SdgClassifier>,
        reader: Arc<dyn RecordReader>,
        params: EvaluationParams,
    ) -> Self {
        Self {
            classifier,
            reader,
            params,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunEvaluationInput,
        writer: &mut dyn RecordWriter,
    ) -> Result<EvaluationSummary, EvaluationError> {
        self.execute_with_progress(input, writer, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunEvaluationInput,
        writer: &mut dyn RecordWriter,
        progress: &dyn EvaluationProgress,
    ) -> Result<EvaluationSummary, EvaluationError> {
        let run_start = Instant::now();
        let (pending, skipped) = self.read_samples(&input, progress)?;
        if pending.is_empty() {
            return Err(EvaluationError::EmptyDataset(input.dataset));
        }

        info!(
            "Evaluating {} samples from {} (concurrency {})",
            pending.len(),
            input.dataset.display(),
            self.params.concurrency
        );
        progress.on_start(pending.len());

        let per_call_timeout = self.params.per_call_timeout;
        let mut outcomes = stream::iter(pending)
            .map(|sample| {
                let classifier = Arc::clone(&self.classifier);
                async move { Self::classify_one(classifier, sample, per_call_timeout).await }
            })
            .buffer_unordered(self.params.concurrency.max(1));

        let mut tally = SingleLabelTally::new();
        let mut timing = TimingStats::default();
        let mut failed = 0;

        while let Some((sample, result, elapsed)) = outcomes.next().await {
            let seconds = elapsed.as_secs_f64();
            timing.record(seconds);

            let PendingSample {
                line_number,
                mut record,
                description,
                truth,
            } = sample;

            let (is_correct, predicted) = match result {
                Ok(prediction) => {
                    let is_correct = self
                        .params
                        .match_policy
                        .is_match(&prediction.classification.sdgs, &truth);
                    let predicted = prediction.classification.rendered();
                    record.insert("sdg_tag".to_string(), json!(prediction.sdg_tag));
                    record.insert(
                        "predicted_sdg".to_string(),
                        json!(prediction.classification.sdgs.labels()),
                    );
                    record.insert(
                        "reason".to_string(),
                        json!(prediction.classification.reason),
                    );
                    (is_correct, predicted)
                }
                Err(e) => {
                    warn!("Classification failed for line {}: {}", line_number, e);
                    failed += 1;
                    record.insert("sdg_tag".to_string(), json!(FAILURE_SENTINEL));
                    record.insert("predicted_sdg".to_string(), json!(FAILURE_SENTINEL));
                    record.insert("reason".to_string(), json!(FAILURE_SENTINEL));
                    record.insert("error_kind".to_string(), json!(e.kind()));
                    record.insert("error".to_string(), json!(e.to_string()));
                    (false, FAILURE_SENTINEL.to_string())
                }
            };

            record.insert("prediction_time".to_string(), json!(seconds));
            record.insert("is_correct".to_string(), json!(is_correct));

            tally.record(&truth, is_correct);
            if !is_correct {
                tally.keep_incorrect(IncorrectSample::new(
                    shared::patent_number(&record),
                    &description,
                    truth.as_str(),
                    predicted,
                ));
            }

            writer.write_record(&Value::Object(record))?;
            progress.on_sample(tally.correct(), tally.total(), is_correct);
        }

        let metadata = self.metadata(&input);
        writer.write_record(&json!({ META_DATA_KEY: &metadata }))?;
        progress.on_finish();

        info!(
            "Evaluation finished: {}/{} correct, results in {}",
            tally.correct(),
            tally.total(),
            writer.path().display()
        );

        Ok(EvaluationSummary::from_tally(
            &tally,
            timing.with_wall_clock(run_start.elapsed().as_secs_f64()),
            failed,
            skipped,
            metadata,
        ))
    }

    /// Parse the dataset, skipping malformed or incomplete lines.
    fn read_samples(
        &self,
        input: &RunEvaluationInput,
        progress: &dyn EvaluationProgress,
    ) -> Result<(Vec<PendingSample>, usize), EvaluationError> {
        let lines = self.reader.read_lines(&input.dataset)?;
        let mut pending = Vec::with_capacity(lines.len());
        let mut skipped = 0;

        for line in lines {
            let parsed = line.text().and_then(shared::parse_object).and_then(|record| {
                let description = shared::description(&record).to_string();
                if description.trim().is_empty() {
                    return Err(format!("missing {DESCRIPTION_FIELD}"));
                }
                let truth = shared::truth_value(&record)
                    .and_then(shared::truth_text)
                    .ok_or_else(|| format!("missing {LABEL_FIELD} or {TRUE_LABEL_FIELD}"))?;
                Ok((record, description, truth))
            });

            match parsed {
                Ok((mut record, description, truth)) => {
                    // keep the scored label under `true_sdg`
                    if !record.contains_key(TRUE_LABEL_FIELD) {
                        if let Some(label) = record.remove(LABEL_FIELD) {
                            record.insert(TRUE_LABEL_FIELD.to_string(), label);
                        }
                    }
                    pending.push(PendingSample {
                        line_number: line.line_number,
                        record,
                        description,
                        truth,
                    });
                }
                Err(reason) => {
                    warn!("Skipping line {}: {}", line.line_number, reason);
                    progress.on_skipped(line.line_number, &reason);
                    skipped += 1;
                }
            }
        }

        Ok((pending, skipped))
    }

    async fn classify_one(
        classifier: Arc<dyn SdgClassifier>,
        sample: PendingSample,
        per_call_timeout: Duration,
    ) -> Outcome {
        let start = Instant::now();
        let result = match tokio::time::timeout(
            per_call_timeout,
            classifier.classify_description(&sample.description),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ClassificationError::Timeout(per_call_timeout)),
        };
        let elapsed = start.elapsed();
        debug!(
            "Line {} classified in {:.3}s",
            sample.line_number,
            elapsed.as_secs_f64()
        );
        (sample, result, elapsed)
    }

    fn metadata(&self, input: &RunEvaluationInput) -> RunMetadata {
        RunMetadata {
            model_name: self.classifier.model_name(),
            testset_path: input.dataset.display().to_string(),
            classifier: self.classifier.kind().to_string(),
            prompt_template: self.classifier.prompt_name().unwrap_or_default(),
            match_policy: self.params.match_policy.to_string(),
            date_creation: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            ..Default::default()
        }
    }
}
