//! Generation configuration from TOML (`[generation]` section)

use crate::ollama::DEFAULT_HOST;
use sdg_application::{DEFAULT_MAX_TOKENS, GenerationParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation service configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Ollama server URL
    pub host: String,
    /// Model name as served by Ollama
    pub model: String,
    pub temperature: f32,
    /// Maximum output tokens
    pub max_tokens: Option<u32>,
    /// Timeout in seconds for one generation call
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            model: "qwen3:8b".to_string(),
            temperature: 0.2,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            timeout_seconds: 300,
        }
    }
}

impl FileGenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_model(self.model.trim())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_timeout(self.timeout())
    }
}
