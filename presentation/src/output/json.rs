//! JSON output formatter

use super::formatter::{ClassificationView, OutputFormatter};
use sdg_domain::{EvaluationSummary, MultiLabelSummary, SdgList};
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &EvaluationSummary) -> String {
        Self::render(summary)
    }

    fn format_multi_label(&self, summary: &MultiLabelSummary) -> String {
        Self::render(summary)
    }

    fn format_classification(&self, view: &ClassificationView) -> String {
        Self::render(view)
    }

    fn format_extraction(&self, sdgs: &SdgList) -> String {
        Self::render(sdgs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdg_domain::{Classification, Evidence, EvidencePair, extract_sdgs};
    use serde_json::Value;

    #[test]
    fn test_extraction_is_label_array() {
        let out = JsonFormatter.format_extraction(&extract_sdgs("SDG7 and 3.1"));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!(["SDG3", "SDG7"]));
    }

    #[test]
    fn test_classification_view_shape() {
        let view = ClassificationView {
            classifier: "zero_shot_llm".to_string(),
            model: "qwen3:8b".to_string(),
            sdg_tag: "SDG6".to_string(),
            classification: Classification::new(extract_sdgs("SDG6"), "water"),
            evidence: Some(Evidence {
                summary: "s".to_string(),
                pairs: vec![EvidencePair::new("c", "e")],
            }),
        };
        let value: Value = serde_json::from_str(&JsonFormatter.format_classification(&view)).unwrap();
        assert_eq!(value["classifier"], "zero_shot_llm");
        assert_eq!(value["reason"], "water");
        assert_eq!(value["evidence"]["pairs"][0]["citation"], "c");
    }
}
