//! Output formatter trait

use super::{ConsoleFormatter, JsonFormatter};
use sdg_domain::{
    Classification, EvaluationSummary, Evidence, MultiLabelSummary, OutputFormat, SdgList,
};
use serde::Serialize;

/// Everything `classify` reports for one patent
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationView {
    pub classifier: String,
    pub model: String,
    /// Raw `<sdg>` tag content
    pub sdg_tag: String,
    #[serde(flatten)]
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

/// Trait for formatting results
pub trait OutputFormatter {
    /// Single-label evaluation or report summary
    fn format_summary(&self, summary: &EvaluationSummary) -> String;

    /// Multi-label report
    fn format_multi_label(&self, summary: &MultiLabelSummary) -> String;

    /// One classification, with evidence when requested
    fn format_classification(&self, view: &ClassificationView) -> String;

    /// Goals referenced in a piece of text
    fn format_extraction(&self, sdgs: &SdgList) -> String;
}

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
