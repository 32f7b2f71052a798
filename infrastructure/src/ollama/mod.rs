//! Ollama adapter for the generation service port
//!
//! - [`OllamaGateway`] — `POST /api/generate` and `GET /api/tags`
//! - [`OllamaError`] — adapter-level failures, mapped onto `GatewayError`

pub mod error;
pub mod gateway;
mod protocol;

pub use error::OllamaError;
pub use gateway::{DEFAULT_HOST, OllamaGateway};
