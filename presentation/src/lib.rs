//! Presentation layer for patent-sdg
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{
    ClassifyArgs, Cli, Command, DEFAULT_RESULTS_FILE, EvaluateArgs, ReportArgs, TextInput,
};
pub use config::OutputConfig;
pub use output::{
    ClassificationView, ConsoleFormatter, JsonFormatter, OutputFormatter, formatter_for,
};
pub use progress::reporter::{EvaluationProgressReporter, SimpleProgress};
