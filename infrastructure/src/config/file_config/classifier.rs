//! Classifier configuration from TOML (`[classifier]` section)

use sdg_domain::prompt::{CITATION_TEMPLATE, LABEL_TEMPLATE};
use sdg_domain::{ClassifierKind, DomainError};
use serde::{Deserialize, Serialize};

/// Raw classifier selection from TOML
///
/// `kind` stays a string here so that an unknown value is reported by
/// validation instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// `zero_shot_llm`, `rule_based` or `nli`
    pub kind: String,
    /// Template name used for classification
    pub label_prompt: String,
    /// Template name used for citations
    pub citation_prompt: String,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::default().as_str().to_string(),
            label_prompt: LABEL_TEMPLATE.to_string(),
            citation_prompt: CITATION_TEMPLATE.to_string(),
        }
    }
}

impl FileClassifierConfig {
    pub fn parse_kind(&self) -> Result<ClassifierKind, DomainError> {
        self.kind.parse()
    }
}
