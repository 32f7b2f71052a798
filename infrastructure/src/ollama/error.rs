//! Error types for the Ollama adapter

use crate::http;
use sdg_application::ports::generation::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid host: {0:?}")]
    InvalidHost(String),
}

impl From<OllamaError> for GatewayError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Http(e) => http::transport_error(e),
            // Ollama answers 404 for unknown models
            OllamaError::Status { status: 404, body } => GatewayError::ModelNotAvailable(body),
            OllamaError::Status { status, body } => {
                GatewayError::RequestFailed(format!("HTTP {status}: {body}"))
            }
            OllamaError::Decode(msg) => GatewayError::InvalidResponse(msg),
            OllamaError::InvalidHost(host) => {
                GatewayError::ConnectionError(format!("invalid host {host:?}"))
            }
        }
    }
}
