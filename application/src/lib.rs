//! Application layer for patent-sdg
//!
//! This crate contains use cases, classifiers, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod classifiers;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use classifiers::{
    ClassificationError, KeywordClassifier, NliClassifier, Prediction, SdgClassifier,
    ZeroShotLlmClassifier,
};
pub use config::{ClassifierSettings, EvaluationParams, GenerationParams, NliSettings};
pub use ports::{
    generation::{DEFAULT_MAX_TOKENS, GatewayError, GenerationOptions, GenerationService, normalize_response},
    label_scorer::{LabelScore, LabelScorer},
    progress::{EvaluationProgress, NoProgress},
    prompt_provider::{BuiltinPrompts, PromptError, PromptProvider},
    records::{DatasetError, RecordLine, RecordReader, RecordWriter},
};
pub use use_cases::cite_evidence::CiteEvidenceUseCase;
pub use use_cases::report::{ReportError, ReportUseCase};
pub use use_cases::run_evaluation::{
    EvaluationError, RunEvaluationInput, RunEvaluationUseCase,
};
