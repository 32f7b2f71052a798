//! Ollama generation gateway
//!
//! Lifecycle: [`OllamaGateway::connect`] builds the client and checks that
//! the configured model is served, the gateway is then shared behind an
//! `Arc`, and [`OllamaGateway::shutdown`] closes it at the end of the run.

use super::error::OllamaError;
use super::protocol::{GenerateRequest, TagsResponse};
use crate::http;
use async_trait::async_trait;
use sdg_application::ports::generation::{GatewayError, GenerationOptions, GenerationService};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Default Ollama endpoint
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Generation service backed by an Ollama server
pub struct OllamaGateway {
    client: reqwest::Client,
    host: String,
}

impl OllamaGateway {
    /// Create a gateway without contacting the server.
    pub fn new(host: &str, timeout: Duration) -> Result<Self, GatewayError> {
        if host.trim().is_empty() {
            return Err(OllamaError::InvalidHost(host.to_string()).into());
        }
        Ok(Self {
            client: http::client(timeout)?,
            host: http::normalize_base_url(host),
        })
    }

    /// Create a gateway and verify that `model` is available.
    pub async fn connect(host: &str, timeout: Duration, model: &str) -> Result<Self, GatewayError> {
        let gateway = Self::new(host, timeout)?;
        gateway.verify_model(model).await?;
        info!("OllamaGateway connected to {} (model {})", gateway.host, model);
        Ok(gateway)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Release the client. Pending requests on other handles are unaffected.
    pub fn shutdown(self) {
        info!("OllamaGateway for {} shut down", self.host);
    }

    async fn get_tags(&self) -> Result<TagsResponse, OllamaError> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.host))
            .send()
            .await?;
        let response = check_status(response).await?;
        response
            .json::<TagsResponse>()
            .await
            .map_err(|e| OllamaError::Decode(e.to_string()))
    }

    async fn post_generate(&self, request: &GenerateRequest<'_>) -> Result<Value, OllamaError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.host))
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| OllamaError::Decode(e.to_string()))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OllamaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OllamaError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl GenerationService for OllamaGateway {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Value, GatewayError> {
        debug!("Generating with {} ({} prompt bytes)", model, prompt.len());
        let request = GenerateRequest::new(model, prompt, options);
        Ok(self.post_generate(&request).await?)
    }

    async fn available_models(&self) -> Result<Vec<String>, GatewayError> {
        let tags = self.get_tags().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;

    #[test]
    fn test_empty_host_rejected() {
        assert!(matches!(
            OllamaGateway::new("  ", Duration::from_secs(1)),
            Err(GatewayError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_returns_raw_body() {
        let server = serve_once(200, r#"{"model":"m","response":" <sdg>SDG3</sdg> ","done":true}"#).await;
        let gateway = OllamaGateway::new(&server.base_url, Duration::from_secs(5)).unwrap();

        let value = gateway
            .generate("m", "prompt", &GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(value["response"], " <sdg>SDG3</sdg> ");

        let request = server.request().await;
        assert!(request.starts_with("POST /api/generate"));
        assert!(request.contains(r#""stream":false"#));
    }

    #[tokio::test]
    async fn test_connect_verifies_model() {
        let server = serve_once(200, r#"{"models":[{"name":"qwen3:latest"}]}"#).await;
        let gateway = OllamaGateway::connect(&server.base_url, Duration::from_secs(5), "qwen3")
            .await
            .unwrap();
        assert!(server.request().await.starts_with("GET /api/tags"));
        gateway.shutdown();
    }

    #[tokio::test]
    async fn test_connect_rejects_missing_model() {
        let server = serve_once(200, r#"{"models":[{"name":"llama3:8b"}]}"#).await;
        let result =
            OllamaGateway::connect(&server.base_url, Duration::from_secs(5), "qwen3:8b").await;
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_typed() {
        let server = serve_once(404, r#"{"error":"model 'x' not found"}"#).await;
        let gateway = OllamaGateway::new(&server.base_url, Duration::from_secs(5)).unwrap();
        let result = gateway.generate("x", "p", &GenerationOptions::default()).await;
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // bind then drop to get a closed port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OllamaGateway::new(&addr.to_string(), Duration::from_secs(5)).unwrap();
        let result = gateway.available_models().await;
        assert!(matches!(result, Err(GatewayError::ConnectionError(_))));
    }
}
