//! # Skald: Overlap Detection for Parallel Translation Corpora
//!
//! Skald compares verse-aligned translations of the same document and flags
//! verse pairs whose similarity is a statistical outlier relative to the other
//! translation pairs at the same verse. It is used to surface potential
//! unacknowledged copying between translations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      CLI (skald)                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  Core Engine      │  Detectors       │  I/O             │
//! │                   │                  │                  │
//! │ • Normalizer      │ • Sequence ratio │ • Aligned corpus │
//! │ • Group evaluator │ • TF-IDF cosine  │ • Detail log     │
//! │ • Pipeline        │                  │ • Ranked summary │
//! │ • Config          │                  │                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skald_rs::core::config::SkaldConfig;
//! use skald_rs::core::pipeline::AnalysisPipeline;
//! use skald_rs::io::vref::AlignedCorpus;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let corpus = AlignedCorpus::load("vref.txt", &["kjv.txt".into(), "web.txt".into()])?;
//!     let pipeline = AnalysisPipeline::new(SkaldConfig::default())?;
//!     let summary = pipeline.run(&corpus, None)?;
//!     println!("{}", summary.render_text());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core analysis engine modules
pub mod core {
    //! Core analysis algorithms and data structures.

    pub mod config;
    pub mod errors;
    pub mod evaluator;
    pub mod normalize;
    pub mod pipeline;
    pub mod stats;
}

// Similarity metrics
pub mod detectors {
    //! Pluggable similarity metrics.

    pub mod similarity;
}

// I/O and reporting
pub mod io {
    //! Corpus reading and report writing.

    pub mod reports;
    pub mod vref;
}

// Re-export primary types for convenience
pub use core::config::SkaldConfig;
pub use core::errors::{Result, SkaldError};
pub use core::pipeline::{AnalysisPipeline, AnalysisSummary};
pub use detectors::similarity::MetricKind;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
