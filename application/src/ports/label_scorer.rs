//! Label scoring port
//!
//! A zero-shot NLI service ranks candidate labels for a text.

use super::generation::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Score of one candidate label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

#[async_trait]
pub trait LabelScorer: Send + Sync {
    /// Score every candidate label for `text`. Order of the result is not
    /// significant.
    async fn score(&self, text: &str, candidates: &[String]) -> Result<Vec<LabelScore>, GatewayError>;
}
