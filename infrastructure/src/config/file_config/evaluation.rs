//! Evaluation configuration from TOML (`[evaluation]` section)

use sdg_domain::{DomainError, MatchPolicy};
use serde::{Deserialize, Serialize};

/// Raw batch evaluation settings from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    /// Classifications in flight at once
    pub concurrency: usize,
    /// `contains` or `exact`
    pub match_policy: String,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        Self {
            concurrency: 1,
            match_policy: MatchPolicy::default().as_str().to_string(),
        }
    }
}

impl FileEvaluationConfig {
    pub fn parse_match_policy(&self) -> Result<MatchPolicy, DomainError> {
        self.match_policy.parse()
    }
}
