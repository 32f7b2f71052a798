//! NLI scorer configuration from TOML (`[nli]` section)

use crate::nli::DEFAULT_TOKEN_ENV;
use sdg_application::NliSettings;
use serde::{Deserialize, Serialize};

/// Hosted `facebook/bart-large-mnli` zero-shot endpoint
pub const DEFAULT_NLI_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-mnli";

/// Raw NLI classifier settings from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNliConfig {
    pub endpoint: String,
    /// Environment variable holding the API token
    pub token_env: String,
    pub threshold: f64,
    pub min_words: usize,
}

impl Default for FileNliConfig {
    fn default() -> Self {
        let settings = NliSettings::default();
        Self {
            endpoint: DEFAULT_NLI_ENDPOINT.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            threshold: settings.threshold,
            min_words: settings.min_words,
        }
    }
}

impl FileNliConfig {
    pub fn to_settings(&self) -> NliSettings {
        NliSettings {
            threshold: self.threshold,
            min_words: self.min_words,
        }
    }
}
