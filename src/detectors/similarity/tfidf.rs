//! TF-IDF weighted n-gram cosine similarity.
//!
//! Each comparison builds its vocabulary from the two texts alone: word-level
//! n-grams of length 1 through 5, raw term counts weighted by smoothed inverse
//! document frequency, L2-normalized, then cosine. IDF weights come from the
//! pair itself, so a score never depends on the rest of the corpus.

use std::collections::BTreeMap;

use crate::core::errors::Result;

use super::SimilarityMetric;

/// Smallest n-gram length included in the vocabulary.
const NGRAM_MIN: usize = 1;

/// Largest n-gram length included in the vocabulary.
const NGRAM_MAX: usize = 5;

/// Per-pair TF-IDF vector-space similarity.
pub struct TfIdfMetric {
    ngram_min: usize,
    ngram_max: usize,
}

impl Default for TfIdfMetric {
    fn default() -> Self {
        Self {
            ngram_min: NGRAM_MIN,
            ngram_max: NGRAM_MAX,
        }
    }
}

impl SimilarityMetric for TfIdfMetric {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn similarity(&self, text1: &str, text2: &str) -> Result<f64> {
        let counts1 = self.ngram_counts(text1);
        let counts2 = self.ngram_counts(text2);

        let v1 = weighted_vector(&counts1, &counts2);
        let v2 = weighted_vector(&counts2, &counts1);
        if v1.is_empty() || v2.is_empty() {
            // a side with no n-grams yields a zero vector, not a failure
            return Ok(0.0);
        }

        let cosine: f64 = v1
            .iter()
            .filter_map(|(term, w1)| v2.get(term).map(|w2| w1 * w2))
            .sum();
        Ok(cosine.min(1.0))
    }
}

impl TfIdfMetric {
    /// Raw counts of all word n-grams of length `ngram_min..=ngram_max`.
    fn ngram_counts(&self, text: &str) -> BTreeMap<String, f64> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut counts = BTreeMap::new();
        for n in self.ngram_min..=self.ngram_max {
            if n > words.len() {
                break;
            }
            for window in words.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0.0) += 1.0;
            }
        }
        counts
    }
}

/// L2-normalized TF-IDF vector for one side of a pair.
///
/// Document frequency is taken over the two-document collection, with the
/// smoothed formulation `idf = ln((1 + n) / (1 + df)) + 1`, `n = 2`.
fn weighted_vector(
    own: &BTreeMap<String, f64>,
    other: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    let mut vector: BTreeMap<String, f64> = BTreeMap::new();
    for (term, tf) in own {
        let df = 1 + usize::from(other.contains_key(term));
        let idf = (3.0 / (1.0 + df as f64)).ln() + 1.0;
        vector.insert(term.clone(), tf * idf);
    }

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
        return BTreeMap::new();
    }
    for weight in vector.values_mut() {
        *weight /= norm;
    }
    vector
}
