//! Risk keyword tables.
//!
//! Two tiers of lowercase phrases. The scorer counts occurrences of each
//! phrase independently, so a table may legitimately contain a phrase that is
//! a substring of another (`delay` / `delayed`); both will match.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in high-risk phrases (weight 2).
pub const DEFAULT_HIGH_RISK_KEYWORDS: &[&str] = &[
    "resist",
    "push back",
    "complain",
    "angry",
    "refuse",
    "delay",
    "delayed",
    "not doing",
];

/// Built-in medium-risk phrases (weight 1).
pub const DEFAULT_MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "confused",
    "unclear",
    "worried",
    "concern",
    "overwhelmed",
    "too busy",
];

static DEFAULT_KEYWORDS: Lazy<Arc<RiskKeywordSet>> =
    Lazy::new(|| Arc::new(RiskKeywordSet::built_in()));

/// Tier a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordTier {
    High,
    Medium,
}

impl KeywordTier {
    /// Score contributed by each occurrence of a phrase in this tier.
    pub fn weight(&self) -> u32 {
        match self {
            KeywordTier::High => 2,
            KeywordTier::Medium => 1,
        }
    }
}

/// Errors raised while loading a keyword table from data.
#[derive(Debug, Error)]
pub enum KeywordTableError {
    #[error("keyword table is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{tier:?} tier contains an empty phrase")]
    EmptyPhrase { tier: KeywordTier },

    #[error("phrase '{phrase}' must be lowercase")]
    NotLowercase { phrase: String },

    #[error("phrase '{phrase}' appears in both tiers")]
    SharedPhrase { phrase: String },

    #[error("phrase '{phrase}' is listed twice")]
    Duplicate { phrase: String },
}

/// Ordered high and medium risk phrase lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskKeywordSet {
    high: Vec<String>,
    medium: Vec<String>,
}

impl RiskKeywordSet {
    /// Creates a validated keyword set.
    pub fn new(high: Vec<String>, medium: Vec<String>) -> Result<Self, KeywordTableError> {
        let set = Self { high, medium };
        set.validate()?;
        Ok(set)
    }

    /// The compiled-in table.
    pub fn built_in() -> Self {
        Self {
            high: DEFAULT_HIGH_RISK_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            medium: DEFAULT_MEDIUM_RISK_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Handle to the compiled-in table, built once per process.
    pub fn shared_default() -> Arc<RiskKeywordSet> {
        Arc::clone(&DEFAULT_KEYWORDS)
    }

    /// Parses a table of the form:
    ///
    /// ```yaml
    /// high: [resist, push back]
    /// medium: [confused]
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, KeywordTableError> {
        let set: RiskKeywordSet = serde_yaml::from_str(source)?;
        set.validate()?;
        Ok(set)
    }

    pub fn high(&self) -> &[String] {
        &self.high
    }

    pub fn medium(&self) -> &[String] {
        &self.medium
    }

    /// Iterates all phrases with their tier, high tier first.
    pub fn iter(&self) -> impl Iterator<Item = (KeywordTier, &str)> {
        self.high
            .iter()
            .map(|p| (KeywordTier::High, p.as_str()))
            .chain(self.medium.iter().map(|p| (KeywordTier::Medium, p.as_str())))
    }

    fn validate(&self) -> Result<(), KeywordTableError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.high.len() + self.medium.len());

        for (tier, phrase) in self.iter() {
            if phrase.trim().is_empty() {
                return Err(KeywordTableError::EmptyPhrase { tier });
            }
            if phrase.to_lowercase() != phrase {
                return Err(KeywordTableError::NotLowercase {
                    phrase: phrase.to_string(),
                });
            }
            if seen.contains(&phrase) {
                let in_high = self.high.iter().any(|p| p == phrase);
                let in_medium = self.medium.iter().any(|p| p == phrase);
                return Err(if in_high && in_medium {
                    KeywordTableError::SharedPhrase {
                        phrase: phrase.to_string(),
                    }
                } else {
                    KeywordTableError::Duplicate {
                        phrase: phrase.to_string(),
                    }
                });
            }
            seen.push(phrase);
        }

        Ok(())
    }
}

impl Default for RiskKeywordSet {
    fn default() -> Self {
        Self::built_in()
    }
}
