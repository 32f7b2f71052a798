//! Generation parameters: model and sampling settings.
//!
//! [`GenerationParams`] is built once from configuration and injected into
//! every component that prompts the generation service.

use crate::ports::generation::{DEFAULT_MAX_TOKENS, GenerationOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model identity, sampling options and per-call timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model name as known to the generation service (e.g. `qwen3:8b`)
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum output tokens (`None` = service default)
    pub max_tokens: Option<u32>,
    /// Timeout for a single generation call
    pub timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "qwen3:8b".to_string(),
            temperature: 0.2,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            timeout: Duration::from_secs(300),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Options sent with each request
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_tokens, Some(20_000));
        assert_eq!(params.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_builder_and_options() {
        let params = GenerationParams::default()
            .with_model("llama3")
            .with_temperature(0.0)
            .with_max_tokens(Some(2048));

        assert_eq!(params.model, "llama3");
        let options = params.options();
        assert_eq!(options.temperature, 0.0);
        assert_eq!(options.max_tokens, Some(2048));
    }
}
