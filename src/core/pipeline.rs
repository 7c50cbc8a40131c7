//! Single-pass corpus analysis pipeline.
//!
//! Rows stream through the evaluator in canonical verse order; flagged pairs
//! go to the detail log immediately and into the running accusation counts.
//! Row order is load-bearing: the summary's tie-break and the detail log's
//! ordering are defined relative to it.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::config::SkaldConfig;
use crate::core::errors::Result;
use crate::core::evaluator::{AlignedRow, GroupEvaluator, RowEvaluation, SkipReason};
use crate::detectors::similarity::{build_metric, SimilarityMetric};
use crate::io::reports::OverlapLog;
use crate::io::vref::AlignedCorpus;

/// Progress callback: `(rows_done, rows_total)`.
pub type ProgressCallback = Box<dyn Fn(usize, usize)>;

/// One ranked entry of the final report.
#[derive(Debug, Clone, Serialize)]
pub struct AccusationRecord {
    /// Source-pair label, `"src <=> tgt"` in original per-pair order
    pub pair: String,
    /// Number of verse rows in which the pair was flagged
    pub count: usize,
}

/// Final ranked report for one corpus pass.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    /// Flagged pairs sorted by count descending, first-seen order on ties
    pub accusations: Vec<AccusationRecord>,
    /// Number of rows that produced a distribution (skipped rows excluded)
    pub compared_rows: usize,
}

impl AnalysisSummary {
    /// Render the summary the way the final report prints it.
    pub fn render_text(&self) -> String {
        if self.accusations.is_empty() {
            return "No significant overlaps found.".to_string();
        }
        let mut out = String::new();
        for record in &self.accusations {
            out.push_str(&format!("{}: {}\n", record.pair, record.count));
        }
        out.push_str(&format!(
            "Conducted comparisons on {} verses.",
            self.compared_rows
        ));
        out
    }
}

/// Running accumulator over one corpus pass.
///
/// Explicit state rather than a process-wide global: a row's evaluation is
/// folded in via [`record_row`](Self::record_row) and the summary is obtained
/// by consuming the aggregator, so a finalized run cannot keep accepting rows.
pub struct OverlapAggregator {
    scale_factor: f64,
    counts: IndexMap<String, usize>,
    compared_rows: usize,
}

impl OverlapAggregator {
    /// Create an aggregator with the configured outlier scale factor.
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            counts: IndexMap::new(),
            compared_rows: 0,
        }
    }

    /// Fold one row's evaluation into the running counts.
    ///
    /// Flagged pairs are written to the detail log as a side effect; skipped
    /// rows are a no-op.
    pub fn record_row<W: Write>(
        &mut self,
        sources: &[String],
        row: &AlignedRow,
        evaluation: &RowEvaluation,
        log: &mut OverlapLog<W>,
    ) -> Result<()> {
        let RowEvaluation::Evaluated { statistics, pairs } = evaluation else {
            return Ok(());
        };
        self.compared_rows += 1;

        for pair in pairs {
            if statistics.is_outlier(pair.score, self.scale_factor) {
                log.write_entry(pair, statistics, sources, row)?;
                *self.counts.entry(pair.pair_label()).or_insert(0) += 1;
            }
        }
        Ok(())
    }

    /// Finalize: rank accusations by count, ties kept in first-seen order.
    pub fn finish(self) -> AnalysisSummary {
        let mut accusations: Vec<AccusationRecord> = self
            .counts
            .into_iter()
            .map(|(pair, count)| AccusationRecord { pair, count })
            .collect();
        // stable sort over insertion order implements the first-seen tie-break
        accusations.sort_by(|a, b| b.count.cmp(&a.count));

        AnalysisSummary {
            accusations,
            compared_rows: self.compared_rows,
        }
    }
}

/// Sequential analysis pipeline over an aligned corpus.
pub struct AnalysisPipeline {
    config: SkaldConfig,
    metric: Box<dyn SimilarityMetric>,
    evaluator: GroupEvaluator,
}

impl AnalysisPipeline {
    /// Validate the configuration and build the selected metric.
    pub fn new(config: SkaldConfig) -> Result<Self> {
        config.validate()?;
        let metric = build_metric(config.metric);
        let evaluator = GroupEvaluator::new(config.book_filter());
        Ok(Self {
            config,
            metric,
            evaluator,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SkaldConfig {
        &self.config
    }

    /// Run one corpus pass and produce the ranked summary.
    ///
    /// The detail log is written to the configured output path as rows are
    /// processed. `progress` is invoked after every row.
    pub fn run(
        &self,
        corpus: &AlignedCorpus,
        progress: Option<ProgressCallback>,
    ) -> Result<AnalysisSummary> {
        info!(
            metric = self.metric.name(),
            sources = corpus.sources().len(),
            rows = corpus.len(),
            "starting corpus pass"
        );

        let mut log = OverlapLog::create(&self.config.output_path)?;
        let mut aggregator = OverlapAggregator::new(self.config.scale_factor);

        let total = corpus.len();
        for (done, row) in corpus.rows().enumerate() {
            let evaluation = self.evaluator.evaluate(corpus.sources(), &row, self.metric.as_ref());
            if let RowEvaluation::Skipped(reason) = &evaluation {
                if *reason == SkipReason::TooFewPairs {
                    debug!(row = done, "row skipped: fewer than two valid pairs");
                }
            }
            aggregator.record_row(corpus.sources(), &row, &evaluation, &mut log)?;
            if let Some(callback) = &progress {
                callback(done + 1, total);
            }
        }
        log.finish()?;

        let summary = aggregator.finish();
        info!(
            flagged_pairs = summary.accusations.len(),
            compared_rows = summary.compared_rows,
            "corpus pass complete"
        );
        Ok(summary)
    }
}
