//! Run metadata record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Description of an evaluation run, written under
/// [`META_DATA_KEY`](super::META_DATA_KEY) after every data record.
///
/// Unknown keys from results files written by other tools are kept in
/// `extra` so a report can display them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunMetadata {
    pub model_name: String,
    pub testset_path: String,
    pub classifier: String,
    pub prompt_template: String,
    pub match_policy: String,
    pub date_creation: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RunMetadata {
    /// Key/value view for display, in a stable order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = [
            ("model_name", &self.model_name),
            ("testset_path", &self.testset_path),
            ("classifier", &self.classifier),
            ("prompt_template", &self.prompt_template),
            ("match_policy", &self.match_policy),
            ("date_creation", &self.date_creation),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();

        entries.extend(self.extra.iter().map(|(k, v)| {
            let value = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), value)
        }));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_are_kept() {
        let json = r#"{"model_name":"qwen3:8b","testset_path":"t.jsonl","prompt_template_path":"p.md"}"#;
        let meta: RunMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.model_name, "qwen3:8b");
        assert_eq!(meta.classifier, "");
        assert_eq!(meta.extra["prompt_template_path"], "p.md");

        let entries = meta.entries();
        assert_eq!(entries[0], ("model_name".to_string(), "qwen3:8b".to_string()));
        assert_eq!(
            entries.last().unwrap(),
            &("prompt_template_path".to_string(), "p.md".to_string())
        );
    }
}
