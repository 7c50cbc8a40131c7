//! Verse-reference-aligned corpus reading.
//!
//! A corpus is one canonical reference list (one reference per line, e.g.
//! `GEN 1:1`, defining row order) plus N translation files, each holding one
//! verse text per line in the same order. Alignment is positional: line k of
//! every file belongs to reference k.

use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SkaldError};
use crate::core::evaluator::{AlignedRow, VerseRecord};

/// A fully loaded, position-aligned corpus of N translations.
#[derive(Debug, Clone)]
pub struct AlignedCorpus {
    sources: Vec<String>,
    references: Vec<String>,
    /// texts[s][k] = verse k of source s
    texts: Vec<Vec<String>>,
}

impl AlignedCorpus {
    /// Load a corpus from a canonical reference list and translation files.
    ///
    /// Fails with an alignment error if any translation's line count differs
    /// from the reference list; nothing is recoverable at that point.
    pub fn load(vref_path: impl AsRef<Path>, paths: &[PathBuf]) -> Result<Self> {
        let references = read_lines(vref_path.as_ref())?;
        if references.is_empty() {
            return Err(SkaldError::alignment_with_path(
                "reference list is empty",
                vref_path.as_ref().display().to_string(),
            ));
        }

        let mut sources = Vec::with_capacity(paths.len());
        let mut texts = Vec::with_capacity(paths.len());
        for path in paths {
            let lines = read_lines(path)?;
            if lines.len() != references.len() {
                return Err(SkaldError::alignment_with_path(
                    format!(
                        "expected {} verse lines, found {}",
                        references.len(),
                        lines.len()
                    ),
                    path.display().to_string(),
                ));
            }
            sources.push(source_name(path));
            texts.push(lines);
        }

        Ok(Self {
            sources,
            references,
            texts,
        })
    }

    /// Translation names in input-path order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Canonical verse references in corpus order.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Number of aligned rows (verse slots).
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the corpus has no rows.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Iterate aligned rows in canonical verse order.
    pub fn rows(&self) -> impl Iterator<Item = AlignedRow> + '_ {
        (0..self.references.len()).map(move |k| AlignedRow {
            records: self
                .texts
                .iter()
                .map(|verses| VerseRecord {
                    reference: self.references[k].clone(),
                    raw_text: verses[k].clone(),
                })
                .collect(),
        })
    }
}

/// Final path component, as the translation's display name.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SkaldError::io(format!("Failed to read {}", path.display()), e))?;
    Ok(content.lines().map(str::to_string).collect())
}
