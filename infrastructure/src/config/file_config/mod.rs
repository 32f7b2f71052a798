//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enumerated settings stay strings until validation so that every problem
//! in a file is reported at once.

mod classifier;
mod evaluation;
mod generation;
mod logging;
mod nli;
mod output;
mod prompts;

pub use classifier::FileClassifierConfig;
pub use evaluation::FileEvaluationConfig;
pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use nli::{DEFAULT_NLI_ENDPOINT, FileNliConfig};
pub use output::FileOutputConfig;
pub use prompts::FilePromptsConfig;

use sdg_application::{ClassifierSettings, EvaluationParams, GenerationParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{field} cannot be 0")]
    InvalidTimeout { field: &'static str },

    #[error("generation.model cannot be empty")]
    EmptyModelName,

    #[error("generation.temperature must be within [0, 2], got {0}")]
    TemperatureOutOfRange(f32),

    #[error("evaluation.concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("classifier.kind: unknown value '{0}' (expected zero_shot_llm, rule_based or nli)")]
    UnknownClassifierKind(String),

    #[error("evaluation.match_policy: unknown value '{0}' (expected contains or exact)")]
    UnknownMatchPolicy(String),

    #[error("nli.threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service settings
    pub generation: FileGenerationConfig,
    /// Classifier selection
    pub classifier: FileClassifierConfig,
    /// Prompt template location
    pub prompts: FilePromptsConfig,
    /// Batch evaluation settings
    pub evaluation: FileEvaluationConfig,
    /// NLI scorer settings
    pub nli: FileNliConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.generation.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout {
                field: "generation.timeout_seconds",
            });
        }
        if self.generation.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        let temperature = self.generation.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            issues.push(ConfigValidationError::TemperatureOutOfRange(temperature));
        }

        if self.classifier.parse_kind().is_err() {
            issues.push(ConfigValidationError::UnknownClassifierKind(
                self.classifier.kind.clone(),
            ));
        }

        if self.evaluation.concurrency == 0 {
            issues.push(ConfigValidationError::InvalidConcurrency);
        }
        if self.evaluation.parse_match_policy().is_err() {
            issues.push(ConfigValidationError::UnknownMatchPolicy(
                self.evaluation.match_policy.clone(),
            ));
        }

        if !(0.0..=1.0).contains(&self.nli.threshold) {
            issues.push(ConfigValidationError::ThresholdOutOfRange(self.nli.threshold));
        }

        issues
    }

    // ==================== Conversions ====================

    pub fn generation_params(&self) -> GenerationParams {
        self.generation.to_params()
    }

    /// Batch parameters. The per-call timeout follows the generation timeout.
    pub fn evaluation_params(&self) -> EvaluationParams {
        let policy = self.evaluation.parse_match_policy().unwrap_or_else(|e| {
            warn!("{}, using the default match policy", e);
            Default::default()
        });
        EvaluationParams::default()
            .with_concurrency(self.evaluation.concurrency)
            .with_per_call_timeout(self.generation.timeout())
            .with_match_policy(policy)
    }

    pub fn classifier_settings(&self) -> ClassifierSettings {
        let kind = self.classifier.parse_kind().unwrap_or_else(|e| {
            warn!("{}, using the default classifier", e);
            Default::default()
        });
        ClassifierSettings {
            kind,
            label_prompt: self.classifier.label_prompt.clone(),
            citation_prompt: self.classifier.citation_prompt.clone(),
            nli: self.nli.to_settings(),
        }
    }
}
