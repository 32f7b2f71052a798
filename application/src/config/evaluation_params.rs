//! Evaluation parameters for batch run control.

use sdg_domain::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch evaluation parameters.
///
/// `concurrency` bounds the number of classifications in flight; 1 runs the
/// dataset sequentially and keeps output order equal to input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationParams {
    pub concurrency: usize,
    /// Timeout for one classification (prompting plus parsing)
    pub per_call_timeout: Duration,
    pub match_policy: MatchPolicy,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            concurrency: 1,
            per_call_timeout: Duration::from_secs(300),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl EvaluationParams {
    // ==================== Builder Methods ====================

    /// Set the worker count (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_per_call_timeout(mut self, timeout: Duration) -> Self {
        self.per_call_timeout = timeout;
        self
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        let params = EvaluationParams::default();
        assert_eq!(params.concurrency, 1);
        assert_eq!(params.match_policy, MatchPolicy::Contains);
    }

    #[test]
    fn test_concurrency_floor() {
        assert_eq!(EvaluationParams::default().with_concurrency(0).concurrency, 1);
        assert_eq!(EvaluationParams::default().with_concurrency(8).concurrency, 8);
    }
}
