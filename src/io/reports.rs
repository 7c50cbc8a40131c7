//! Detail log writing.
//!
//! Every flagged pair is appended to a plain-text log as one blank-line
//! terminated block: a header with the reference, score, distribution and
//! source pair, the two normalized texts under short source tags, and the raw
//! text of every source in the row for reviewer context.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::errors::{Result, SkaldError};
use crate::core::evaluator::{AlignedRow, PairScore};
use crate::core::stats::GroupStatistics;

/// Append-style writer for the flagged-pair detail log.
pub struct OverlapLog<W: Write> {
    writer: W,
}

impl OverlapLog<BufWriter<File>> {
    /// Create (truncating) the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            SkaldError::io(format!("Failed to create log file {}", path.display()), e)
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> OverlapLog<W> {
    /// Wrap an arbitrary writer; used directly by tests.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one flagged-pair block.
    ///
    /// `sources` and `row` cover the whole verse row so the reviewer sees the
    /// non-flagged translations too.
    pub fn write_entry(
        &mut self,
        pair: &PairScore,
        statistics: &GroupStatistics,
        sources: &[String],
        row: &AlignedRow,
    ) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {:.6} (mean: {:.6}, std_dev: {:.6}) {}",
            pair.reference_label(),
            pair.score,
            statistics.mean,
            statistics.std_dev,
            pair.pair_label()
        )?;
        writeln!(self.writer, "{}: {}", short_tag(&pair.src), pair.src_text)?;
        writeln!(self.writer, "{}: {}", short_tag(&pair.tgt), pair.tgt_text)?;
        for (source, record) in sources.iter().zip(&row.records) {
            writeln!(self.writer, "\t{}: {}", source, record.raw_text)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Flush and release the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Short display tag for a source name: four characters starting at the
/// fourth, which lands on the translation id in `xxx-<id>.txt` style names.
fn short_tag(source: &str) -> String {
    source.chars().skip(3).take(4).collect()
}
