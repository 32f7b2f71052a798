//! Classifier selection settings.

use sdg_domain::ClassifierKind;
use sdg_domain::prompt::{CITATION_TEMPLATE, LABEL_TEMPLATE};
use serde::{Deserialize, Serialize};

/// Which classifier to build and how to configure it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSettings {
    pub kind: ClassifierKind,
    /// Template name for goal classification
    pub label_prompt: String,
    /// Template name for citation generation
    pub citation_prompt: String,
    pub nli: NliSettings,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::default(),
            label_prompt: LABEL_TEMPLATE.to_string(),
            citation_prompt: CITATION_TEMPLATE.to_string(),
            nli: NliSettings::default(),
        }
    }
}

impl ClassifierSettings {
    pub fn with_kind(mut self, kind: ClassifierKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Thresholds of the NLI classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NliSettings {
    /// Minimum top score for a goal to be reported
    pub threshold: f64,
    /// Descriptions with at most this many words are not scored
    pub min_words: usize,
}

impl Default for NliSettings {
    fn default() -> Self {
        Self {
            threshold: 0.18,
            min_words: 20,
        }
    }
}
