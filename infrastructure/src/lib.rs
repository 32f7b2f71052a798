//! Infrastructure layer for patent-sdg
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
mod http;
pub mod nli;
pub mod ollama;
pub mod prompts;
pub mod records;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, ConfigValidationError, FileClassifierConfig, FileConfig,
    FileEvaluationConfig, FileGenerationConfig, FileLoggingConfig, FileNliConfig,
    FileOutputConfig, FilePromptsConfig,
};
pub use nli::HfZeroShotScorer;
pub use ollama::{OllamaError, OllamaGateway};
pub use prompts::FilePromptProvider;
pub use records::{JsonlRecordReader, JsonlResultsWriter, safe_output_path};
