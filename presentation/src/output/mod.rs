//! Output formatting for classification and evaluation results

pub mod console;
pub mod formatter;
pub mod json;

pub use console::ConsoleFormatter;
pub use formatter::{ClassificationView, OutputFormatter, formatter_for};
pub use json::JsonFormatter;
