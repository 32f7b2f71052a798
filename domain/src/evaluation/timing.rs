//! Prediction latency statistics.

use super::ratio;
use serde::{Deserialize, Serialize};

/// Accumulated prediction times.
///
/// Throughput uses the wall-clock duration of the run when known, so that
/// concurrent runs report real throughput; otherwise the sum of per-sample
/// times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub samples: usize,
    pub prediction_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_seconds: Option<f64>,
}

impl TimingStats {
    pub fn record(&mut self, seconds: f64) {
        self.samples += 1;
        self.prediction_seconds += seconds;
    }

    pub fn with_wall_clock(mut self, seconds: f64) -> Self {
        self.wall_seconds = Some(seconds);
        self
    }

    pub fn total_seconds(&self) -> f64 {
        self.wall_seconds.unwrap_or(self.prediction_seconds)
    }

    pub fn average_seconds(&self) -> f64 {
        ratio(self.prediction_seconds, self.samples as f64)
    }

    pub fn predictions_per_second(&self) -> f64 {
        ratio(self.samples as f64, self.total_seconds())
    }
}
