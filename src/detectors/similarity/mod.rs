//! Pluggable similarity metrics for normalized verse text.
//!
//! A metric is selected once per run and the rest of the engine only sees the
//! [`SimilarityMetric`] trait object. Two strategies are provided: a
//! character-sequence match ratio and a per-pair TF-IDF cosine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::errors::Result;

pub mod sequence;
pub mod tfidf;

pub use sequence::SequenceMetric;
pub use tfidf::TfIdfMetric;

/// Scalar similarity between two normalized texts.
///
/// Implementations are stateless per call: a score depends only on the two
/// texts being compared, never on previously seen documents.
pub trait SimilarityMetric: Send + Sync {
    /// Short metric name used in logs and run headers.
    fn name(&self) -> &'static str;

    /// Compute the similarity between two normalized texts, in `[0, 1]`.
    fn similarity(&self, text1: &str, text2: &str) -> Result<f64>;
}

/// Available similarity metric variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Longest-matching-block character sequence ratio
    Sequence,
    /// TF-IDF weighted word n-gram cosine similarity
    Tfidf,
}

impl MetricKind {
    /// Stable identifier used in configuration files and run headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Tfidf => "tfidf",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instantiate the metric for the selected variant.
pub fn build_metric(kind: MetricKind) -> Box<dyn SimilarityMetric> {
    match kind {
        MetricKind::Sequence => Box::new(SequenceMetric),
        MetricKind::Tfidf => Box::new(TfIdfMetric::default()),
    }
}
