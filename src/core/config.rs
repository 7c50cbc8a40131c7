//! Configuration types and management for skald-rs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SkaldError};
use crate::detectors::similarity::MetricKind;

/// Main configuration for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkaldConfig {
    /// Similarity metric variant, selected once per run
    pub metric: MetricKind,

    /// Restrict processing to these books (USFM abbreviations); `None` means
    /// the whole corpus
    pub books: Option<Vec<String>>,

    /// Destination for the detail log
    pub output_path: PathBuf,

    /// Outlier threshold multiplier on the per-verse standard deviation
    pub scale_factor: f64,
}

impl Default for SkaldConfig {
    fn default() -> Self {
        Self {
            metric: MetricKind::Tfidf,
            books: None,
            output_path: default_output_path(),
            scale_factor: 2.0,
        }
    }
}

/// Default detail-log destination under the system temp directory.
pub fn default_output_path() -> PathBuf {
    std::env::temp_dir().join("skald-overlaps.log")
}

impl SkaldConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkaldError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(SkaldError::config_field(
                "scale_factor must be a positive finite number",
                "scale_factor",
            ));
        }

        if let Some(books) = &self.books {
            if books.iter().any(|b| b.trim().is_empty()) {
                return Err(SkaldError::config_field(
                    "book identifiers must be non-empty",
                    "books",
                ));
            }
        }

        Ok(())
    }

    /// Book filter as a lookup set, `None` when unrestricted.
    pub fn book_filter(&self) -> Option<HashSet<String>> {
        self.books
            .as_ref()
            .map(|books| books.iter().map(|b| b.trim().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SkaldConfig::default();
        assert_eq!(config.metric, MetricKind::Tfidf);
        assert!(config.books.is_none());
        assert!((config.scale_factor - 2.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = SkaldConfig::default();
        config.metric = MetricKind::Sequence;
        config.books = Some(vec!["GEN".to_string(), "EXO".to_string()]);
        config.scale_factor = 1.5;

        let yaml = config.to_yaml_string().unwrap();
        let parsed: SkaldConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.metric, MetricKind::Sequence);
        assert_eq!(parsed.books.as_deref(), Some(&["GEN".to_string(), "EXO".to_string()][..]));
        assert!((parsed.scale_factor - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let parsed: SkaldConfig = serde_yaml::from_str("metric: sequence\n").unwrap();
        assert_eq!(parsed.metric, MetricKind::Sequence);
        assert!((parsed.scale_factor - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_positive_scale_factor() {
        let mut config = SkaldConfig::default();
        config.scale_factor = 0.0;
        assert!(config.validate().is_err());
        config.scale_factor = -1.0;
        assert!(config.validate().is_err());
        config.scale_factor = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_book_ids() {
        let mut config = SkaldConfig::default();
        config.books = Some(vec!["GEN".to_string(), "  ".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_metric_name_fails_to_parse() {
        let result: std::result::Result<SkaldConfig, _> =
            serde_yaml::from_str("metric: levenshtein\n");
        assert!(result.is_err());
    }
}
