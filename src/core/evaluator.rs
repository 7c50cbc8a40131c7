//! Per-verse group evaluation.
//!
//! One aligned row of verses (one cell per translation) is normalized, scored
//! pairwise under the active metric, and reduced to a similarity distribution.
//! Rows that cannot establish a distribution are skipped.

use std::collections::HashSet;

use tracing::debug;

use crate::core::normalize::{is_excluded, normalize};
use crate::core::stats::GroupStatistics;
use crate::detectors::similarity::SimilarityMetric;

/// One verse cell as produced by the aligned corpus reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    /// Canonical verse reference, e.g. `GEN 1:1`
    pub reference: String,
    /// Raw verse text as it appears in the translation file
    pub raw_text: String,
}

/// One position-aligned set of verse records, one per translation.
#[derive(Debug, Clone)]
pub struct AlignedRow {
    /// Records in input-path order; `records.len()` equals the source count
    pub records: Vec<VerseRecord>,
}

/// Similarity score for one unordered pair of sources within a row.
#[derive(Debug, Clone)]
pub struct PairScore {
    /// First source name (lower input index)
    pub src: String,
    /// First source verse reference
    pub src_ref: String,
    /// First source normalized text
    pub src_text: String,
    /// Second source name
    pub tgt: String,
    /// Second source verse reference
    pub tgt_ref: String,
    /// Second source normalized text
    pub tgt_text: String,
    /// Similarity in `[0, 1]`
    pub score: f64,
}

impl PairScore {
    /// Source-pair label used for accusation keys and log headers.
    pub fn pair_label(&self) -> String {
        format!("{} <=> {}", self.src, self.tgt)
    }

    /// Reference label: the shared reference, or both joined when they differ.
    pub fn reference_label(&self) -> String {
        if self.src_ref == self.tgt_ref {
            self.src_ref.clone()
        } else {
            format!("{} <=> {}", self.src_ref, self.tgt_ref)
        }
    }
}

/// Why a row produced no distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The row's book is outside the configured book filter
    BookFiltered,
    /// Fewer than two pairs survived filtering; no variance to measure
    TooFewPairs,
}

/// Result of evaluating one aligned row.
#[derive(Debug, Clone)]
pub enum RowEvaluation {
    /// The row produced a similarity distribution
    Evaluated {
        /// Mean and spread of the surviving pair scores
        statistics: GroupStatistics,
        /// Surviving pairs in `(i, j)` source-index order, `i < j`
        pairs: Vec<PairScore>,
    },
    /// The row was skipped and contributes nothing downstream
    Skipped(SkipReason),
}

/// Evaluates aligned rows against a similarity metric.
#[derive(Debug, Default)]
pub struct GroupEvaluator {
    books: Option<HashSet<String>>,
}

impl GroupEvaluator {
    /// Create an evaluator with an optional book filter (USFM abbreviations).
    pub fn new(books: Option<HashSet<String>>) -> Self {
        Self { books }
    }

    /// Evaluate one aligned row.
    ///
    /// `sources` carries the translation names in input-path order and must be
    /// the same length as `row.records`. Pair ordering follows the source
    /// index order `(i, j)`, `i < j`; reports depend on it being stable.
    pub fn evaluate(
        &self,
        sources: &[String],
        row: &AlignedRow,
        metric: &dyn SimilarityMetric,
    ) -> RowEvaluation {
        debug_assert_eq!(sources.len(), row.records.len());

        if let Some(books) = &self.books {
            let book = row
                .records
                .first()
                .and_then(|r| r.reference.split(' ').next())
                .unwrap_or("");
            if !books.contains(book) {
                return RowEvaluation::Skipped(SkipReason::BookFiltered);
            }
        }

        let normalized: Vec<String> = row.records.iter().map(|r| normalize(&r.raw_text)).collect();

        let mut pairs = Vec::new();
        for i in 0..row.records.len() {
            if is_excluded(&normalized[i]) {
                continue;
            }
            for j in (i + 1)..row.records.len() {
                if is_excluded(&normalized[j]) {
                    continue;
                }
                match metric.similarity(&normalized[i], &normalized[j]) {
                    Ok(score) => pairs.push(PairScore {
                        src: sources[i].clone(),
                        src_ref: row.records[i].reference.clone(),
                        src_text: normalized[i].clone(),
                        tgt: sources[j].clone(),
                        tgt_ref: row.records[j].reference.clone(),
                        tgt_text: normalized[j].clone(),
                        score,
                    }),
                    // a single failed comparison drops that pair, never the row
                    Err(err) => debug!(
                        source = %sources[i],
                        target = %sources[j],
                        reference = %row.records[i].reference,
                        "dropping pair after metric failure: {err}"
                    ),
                }
            }
        }

        if pairs.len() < 2 {
            return RowEvaluation::Skipped(SkipReason::TooFewPairs);
        }

        let scores: Vec<f64> = pairs.iter().map(|p| p.score).collect();
        match GroupStatistics::from_scores(&scores) {
            Some(statistics) => RowEvaluation::Evaluated { statistics, pairs },
            None => RowEvaluation::Skipped(SkipReason::TooFewPairs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{Result, SkaldError};
    use crate::detectors::similarity::SequenceMetric;

    fn row(texts: &[&str]) -> AlignedRow {
        AlignedRow {
            records: texts
                .iter()
                .map(|t| VerseRecord {
                    reference: "GEN 1:1".to_string(),
                    raw_text: (*t).to_string(),
                })
                .collect(),
        }
    }

    fn sources(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("src{i}.txt")).collect()
    }

    /// Fails on any text containing "poison"; used to exercise pair dropping.
    struct FragileMetric;

    impl SimilarityMetric for FragileMetric {
        fn name(&self) -> &'static str {
            "fragile"
        }

        fn similarity(&self, text1: &str, text2: &str) -> Result<f64> {
            if text1.contains("poison") || text2.contains("poison") {
                return Err(SkaldError::metric("degenerate input"));
            }
            Ok(0.5)
        }
    }

    #[test]
    fn single_source_row_is_skipped() {
        let evaluator = GroupEvaluator::default();
        let result = evaluator.evaluate(&sources(1), &row(&["god is love"]), &SequenceMetric);
        assert!(matches!(
            result,
            RowEvaluation::Skipped(SkipReason::TooFewPairs)
        ));
    }

    #[test]
    fn two_source_row_has_one_pair_and_is_skipped() {
        // one score alone has no variance
        let evaluator = GroupEvaluator::default();
        let result = evaluator.evaluate(
            &sources(2),
            &row(&["god is love", "god is love"]),
            &SequenceMetric,
        );
        assert!(matches!(
            result,
            RowEvaluation::Skipped(SkipReason::TooFewPairs)
        ));
    }

    #[test]
    fn three_sources_produce_three_ordered_pairs() {
        let evaluator = GroupEvaluator::default();
        let result = evaluator.evaluate(
            &sources(3),
            &row(&["god is love", "god is love", "the sky is blue today"]),
            &SequenceMetric,
        );
        let RowEvaluation::Evaluated { statistics, pairs } = result else {
            panic!("expected evaluated row");
        };
        assert_eq!(pairs.len(), 3);
        let labels: Vec<String> = pairs.iter().map(PairScore::pair_label).collect();
        assert_eq!(
            labels,
            vec![
                "src1.txt <=> src2.txt",
                "src1.txt <=> src3.txt",
                "src2.txt <=> src3.txt"
            ]
        );
        assert!((pairs[0].score - 1.0).abs() < 1e-12);
        assert!((statistics.mean - 0.583_333_333_333_333_4).abs() < 1e-12);
    }

    #[test]
    fn empty_and_range_cells_are_excluded() {
        let evaluator = GroupEvaluator::default();
        // only two comparable cells remain -> one pair -> skipped
        let result = evaluator.evaluate(
            &sources(4),
            &row(&["god is love", "", "<range>", "god is light"]),
            &SequenceMetric,
        );
        assert!(matches!(
            result,
            RowEvaluation::Skipped(SkipReason::TooFewPairs)
        ));
    }

    #[test]
    fn metric_failure_drops_only_that_pair() {
        let evaluator = GroupEvaluator::default();
        let result = evaluator.evaluate(
            &sources(3),
            &row(&["good text", "poison text", "another good text"]),
            &FragileMetric,
        );
        // pairs touching the poisoned cell fail, leaving (1,3) alone -> skipped
        assert!(matches!(
            result,
            RowEvaluation::Skipped(SkipReason::TooFewPairs)
        ));

        let result = evaluator.evaluate(
            &sources(4),
            &row(&["a", "poison", "b", "c"]),
            &FragileMetric,
        );
        let RowEvaluation::Evaluated { pairs, .. } = result else {
            panic!("expected evaluated row");
        };
        // of six pairs, the three touching the poisoned cell are dropped
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| !p.src_text.contains("poison")
            && !p.tgt_text.contains("poison")));
    }

    #[test]
    fn book_filter_skips_foreign_rows() {
        let books: HashSet<String> = ["GEN".to_string()].into_iter().collect();
        let evaluator = GroupEvaluator::new(Some(books));

        let mut exodus = row(&["a b c", "a b c", "a b d"]);
        for record in &mut exodus.records {
            record.reference = "EXO 1:1".to_string();
        }
        let result = evaluator.evaluate(&sources(3), &exodus, &SequenceMetric);
        assert!(matches!(
            result,
            RowEvaluation::Skipped(SkipReason::BookFiltered)
        ));

        let genesis = row(&["a b c", "a b c", "a b d"]);
        let result = evaluator.evaluate(&sources(3), &genesis, &SequenceMetric);
        assert!(matches!(result, RowEvaluation::Evaluated { .. }));
    }

    #[test]
    fn reference_label_joins_differing_references() {
        let pair = PairScore {
            src: "a.txt".into(),
            src_ref: "GEN 1:1".into(),
            src_text: "x".into(),
            tgt: "b.txt".into(),
            tgt_ref: "GEN 1:2".into(),
            tgt_text: "y".into(),
            score: 0.0,
        };
        assert_eq!(pair.reference_label(), "GEN 1:1 <=> GEN 1:2");
    }
}
