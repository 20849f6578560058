//! Risk scanner configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::risk::{
    RiskKeywordSet, RiskScorer, RiskThresholds, DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD,
};

use super::error::{ConfigError, ValidationError};

/// Keyword table and threshold configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Optional YAML file replacing the built-in keyword table
    pub keywords_path: Option<PathBuf>,

    /// Score at or above which risk is High
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u32,

    /// Score at or above which risk is Medium
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u32,
}

impl ScannerConfig {
    /// Threshold pair, validated
    pub fn thresholds(&self) -> Result<RiskThresholds, ValidationError> {
        RiskThresholds::try_new(self.high_threshold, self.medium_threshold)
            .map_err(ValidationError::InvalidThresholds)
    }

    /// Loads the keyword table from `keywords_path`, or the built-in table
    pub fn load_keywords(&self) -> Result<RiskKeywordSet, ConfigError> {
        let Some(path) = &self.keywords_path else {
            return Ok(RiskKeywordSet::built_in());
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::KeywordFile {
            path: path.clone(),
            source,
        })?;

        let keywords = RiskKeywordSet::from_yaml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            high = keywords.high().len(),
            medium = keywords.medium().len(),
            "Loaded keyword table"
        );
        Ok(keywords)
    }

    /// Builds a scorer from this configuration
    pub fn build_scorer(&self) -> Result<RiskScorer, ConfigError> {
        let thresholds = self.thresholds()?;
        let keywords = self.load_keywords()?;
        Ok(RiskScorer::new(keywords, thresholds))
    }

    /// Validate scanner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds()?;
        Ok(())
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            keywords_path: None,
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

fn default_high_threshold() -> u32 {
    DEFAULT_HIGH_THRESHOLD
}

fn default_medium_threshold() -> u32 {
    DEFAULT_MEDIUM_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::RiskLevel;
    use std::io::Write;

    #[test]
    fn test_defaults_build_built_in_scorer() {
        let scorer = ScannerConfig::default().build_scorer().unwrap();

        assert_eq!(scorer.thresholds(), RiskThresholds::default());
        assert_eq!(scorer.keywords(), &RiskKeywordSet::built_in());
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        let config = ScannerConfig {
            high_threshold: 2,
            medium_threshold: 4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_loads_keywords_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "high:\n  - walk out\nmedium:\n  - tired").unwrap();

        let config = ScannerConfig {
            keywords_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let scorer = config.build_scorer().unwrap();

        let result = scorer.score("Tired staff threaten to walk out");
        assert_eq!(result.score(), 3);
        assert_eq!(result.level(), RiskLevel::Medium);
    }

    #[test]
    fn test_missing_keyword_file() {
        let config = ScannerConfig {
            keywords_path: Some(PathBuf::from("/nonexistent/keywords.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.load_keywords(),
            Err(ConfigError::KeywordFile { .. })
        ));
    }

    #[test]
    fn test_invalid_keyword_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "high:\n  - Walk Out\nmedium: []").unwrap();

        let config = ScannerConfig {
            keywords_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.load_keywords(),
            Err(ConfigError::KeywordTable(_))
        ));
    }
}
