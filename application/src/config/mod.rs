//! Application-level configuration.
//!
//! These structs are built once at startup from the loaded configuration
//! file and injected into classifiers and use cases:
//!
//! - [`GenerationParams`] — model, sampling options, per-call timeout
//! - [`EvaluationParams`] — batch concurrency and match policy
//! - [`ClassifierSettings`] — classifier variant and its templates/thresholds

pub mod classifier_settings;
pub mod evaluation_params;
pub mod generation_params;

pub use classifier_settings::{ClassifierSettings, NliSettings};
pub use evaluation_params::EvaluationParams;
pub use generation_params::GenerationParams;
