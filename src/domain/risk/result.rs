//! Output of a single risk scan.

use serde::{Deserialize, Serialize};

use super::keywords::KeywordTier;
use super::level::RiskLevel;
use super::readiness::Readiness;

/// Occurrences of one keyword in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub tier: KeywordTier,
    pub count: u32,
}

/// Immutable result of scoring a text.
///
/// Built only by [`RiskScorer`](super::RiskScorer); `level` and `readiness`
/// always agree with `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskResult {
    level: RiskLevel,
    score: u32,
    high_hits: u32,
    medium_hits: u32,
    readiness: Readiness,
    keyword_hits: Vec<KeywordHit>,
}

impl RiskResult {
    pub(super) fn new(
        level: RiskLevel,
        score: u32,
        high_hits: u32,
        medium_hits: u32,
        keyword_hits: Vec<KeywordHit>,
    ) -> Self {
        Self {
            level,
            score,
            high_hits,
            medium_hits,
            readiness: Readiness::from_score(score),
            keyword_hits,
        }
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_hits(&self) -> u32 {
        self.high_hits
    }

    pub fn medium_hits(&self) -> u32 {
        self.medium_hits
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Advisory message for the detected level.
    pub fn message(&self) -> &'static str {
        self.level.message()
    }

    /// Keywords that matched at least once, in table order.
    pub fn keyword_hits(&self) -> &[KeywordHit] {
        &self.keyword_hits
    }

    /// True when no keyword matched.
    pub fn is_clean(&self) -> bool {
        self.keyword_hits.is_empty()
    }
}
