//! Per-verse similarity distribution statistics.

use serde::{Deserialize, Serialize};

/// Mean and spread of the pairwise similarity scores within one verse row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    /// Arithmetic mean of the surviving pair scores
    pub mean: f64,
    /// Population standard deviation (divides by n, not n - 1)
    pub std_dev: f64,
}

impl GroupStatistics {
    /// Compute statistics over a row's pair scores.
    ///
    /// Returns `None` for an empty slice; callers enforce the stronger
    /// two-score minimum needed for a meaningful distribution.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Strict outlier test: `score - mean > std_dev * scale_factor`.
    ///
    /// A score exactly on the boundary is not an outlier.
    pub fn is_outlier(&self, score: f64, scale_factor: f64) -> bool {
        score - self.mean > self.std_dev * scale_factor
    }
}
