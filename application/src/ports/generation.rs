//! Generation service port
//!
//! Defines the interface for prompting a generative language model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during generation service operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Output token cap applied unless configured otherwise
pub const DEFAULT_MAX_TOKENS: u32 = 20_000;

/// Sampling options sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    /// Maximum output tokens; `None` leaves the service default
    pub max_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}

/// Gateway to a text generation service
///
/// Implementations (adapters) live in the infrastructure layer. The raw
/// response is returned as JSON because services disagree on its shape;
/// [`normalize_response`] is the single place that turns it into text.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate a completion for `prompt` with `model`
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Value, GatewayError>;

    /// Names of the models the service can run
    async fn available_models(&self) -> Result<Vec<String>, GatewayError>;

    /// Fail with [`GatewayError::ModelNotAvailable`] unless `model` is served.
    ///
    /// A name without a tag also matches its `:latest` variant.
    async fn verify_model(&self, model: &str) -> Result<(), GatewayError> {
        let models = self.available_models().await?;
        let wanted_latest = format!("{model}:latest");
        if models.iter().any(|m| m == model || *m == wanted_latest) {
            Ok(())
        } else {
            Err(GatewayError::ModelNotAvailable(model.to_string()))
        }
    }
}

/// Turn any response shape into the model's text.
///
/// - object: its `response` field (empty when missing or not a string)
/// - string: itself
/// - anything else: its JSON rendering, with a warning
///
/// The result is trimmed.
pub fn normalize_response(value: Value) -> String {
    match value {
        Value::Object(map) => map
            .get("response")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        Value::String(s) => s.trim().to_string(),
        other => {
            warn!("Unexpected response shape from generation service, converting to string");
            other.to_string().trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_object() {
        let value = json!({"model": "m", "response": "  <sdg>SDG1</sdg>\n", "done": true});
        assert_eq!(normalize_response(value), "<sdg>SDG1</sdg>");
        assert_eq!(normalize_response(json!({"done": true})), "");
    }

    #[test]
    fn test_normalize_string() {
        assert_eq!(normalize_response(json!(" text ")), "text");
    }

    #[test]
    fn test_normalize_other_shapes() {
        assert_eq!(normalize_response(json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(normalize_response(json!(42)), "42");
        assert_eq!(normalize_response(Value::Null), "null");
    }

    struct FixedModels(Vec<String>);

    #[async_trait]
    impl GenerationService for FixedModels {
        async fn generate(
            &self,
            _model: &str,
            _prompt: &str,
            _options: &GenerationOptions,
        ) -> Result<Value, GatewayError> {
            Ok(Value::Null)
        }

        async fn available_models(&self) -> Result<Vec<String>, GatewayError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_verify_model() {
        let service = FixedModels(vec!["qwen3:8b".to_string(), "llama3:latest".to_string()]);
        assert!(service.verify_model("qwen3:8b").await.is_ok());
        assert!(service.verify_model("llama3").await.is_ok());
        assert!(matches!(
            service.verify_model("mistral").await,
            Err(GatewayError::ModelNotAvailable(_))
        ));
    }
}
