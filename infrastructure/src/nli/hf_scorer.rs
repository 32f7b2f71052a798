//! Hugging Face zero-shot classification endpoint
//!
//! Request: `{"inputs": text, "parameters": {"candidate_labels": [...]}}`.
//! Two response shapes are accepted: the pipeline form
//! `{"labels": [...], "scores": [...]}` and the list form
//! `[{"label": .., "score": ..}, ...]`.

use crate::http;
use async_trait::async_trait;
use sdg_application::ports::generation::GatewayError;
use sdg_application::ports::label_scorer::{LabelScore, LabelScorer};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable holding the API token unless configured otherwise
pub const DEFAULT_TOKEN_ENV: &str = "HF_TOKEN";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreResponse {
    Pipeline { labels: Vec<String>, scores: Vec<f64> },
    List(Vec<LabelScoreEntry>),
}

#[derive(Debug, Serialize, Deserialize)]
struct LabelScoreEntry {
    label: String,
    score: f64,
}

impl ScoreResponse {
    fn into_scores(self) -> Result<Vec<LabelScore>, GatewayError> {
        match self {
            ScoreResponse::Pipeline { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(GatewayError::InvalidResponse(format!(
                        "{} labels but {} scores",
                        labels.len(),
                        scores.len()
                    )));
                }
                Ok(labels
                    .into_iter()
                    .zip(scores)
                    .map(|(label, score)| LabelScore { label, score })
                    .collect())
            }
            ScoreResponse::List(entries) => Ok(entries
                .into_iter()
                .map(|e| LabelScore {
                    label: e.label,
                    score: e.score,
                })
                .collect()),
        }
    }
}

/// Label scorer backed by a hosted zero-shot classification model
pub struct HfZeroShotScorer {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HfZeroShotScorer {
    /// `token_env` names the environment variable read for the bearer token;
    /// an unset variable sends unauthenticated requests.
    pub fn new(endpoint: &str, token_env: &str, timeout: Duration) -> Result<Self, GatewayError> {
        if endpoint.trim().is_empty() {
            return Err(GatewayError::ConnectionError(
                "NLI endpoint is not configured".to_string(),
            ));
        }
        let token = std::env::var(token_env).ok().filter(|t| !t.is_empty());
        if token.is_none() {
            warn!("{} is not set, NLI requests are unauthenticated", token_env);
        }
        Ok(Self {
            client: http::client(timeout)?,
            endpoint: http::normalize_base_url(endpoint),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LabelScorer for HfZeroShotScorer {
    async fn score(
        &self,
        text: &str,
        candidates: &[String],
    ) -> Result<Vec<LabelScore>, GatewayError> {
        let body = json!({
            "inputs": text,
            "parameters": {"candidate_labels": candidates},
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(http::transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: ScoreResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let scores = parsed.into_scores()?;
        debug!("Scored {} candidate labels", scores.len());
        Ok(scores)
    }
}
