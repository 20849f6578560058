//! Risk Scorer - keyword-weighted scoring of free text.

use std::sync::Arc;

use super::keywords::{KeywordTier, RiskKeywordSet};
use super::level::RiskThresholds;
use super::result::{KeywordHit, RiskResult};

/// Scores text against a keyword table.
///
/// Stateless apart from its read-only table and thresholds; safe to share
/// across requests.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    keywords: Arc<RiskKeywordSet>,
    thresholds: RiskThresholds,
}

impl RiskScorer {
    pub fn new(keywords: RiskKeywordSet, thresholds: RiskThresholds) -> Self {
        Self::with_shared(Arc::new(keywords), thresholds)
    }

    /// Builds a scorer over a table that is already shared.
    pub fn with_shared(keywords: Arc<RiskKeywordSet>, thresholds: RiskThresholds) -> Self {
        Self {
            keywords,
            thresholds,
        }
    }

    pub fn keywords(&self) -> &RiskKeywordSet {
        &self.keywords
    }

    pub fn thresholds(&self) -> RiskThresholds {
        self.thresholds
    }

    /// Scores `text`.
    ///
    /// Matching is case-insensitive and counts non-overlapping occurrences
    /// of each phrase separately. Phrases are never deduplicated against each
    /// other, so "delayed" counts once for `delay` and once for `delayed`.
    pub fn score(&self, text: &str) -> RiskResult {
        let normalized = text.to_lowercase();

        let mut score = 0u32;
        let mut high_hits = 0u32;
        let mut medium_hits = 0u32;
        let mut keyword_hits = Vec::new();

        for (tier, phrase) in self.keywords.iter() {
            let count = normalized.matches(phrase).count() as u32;
            if count == 0 {
                continue;
            }

            score = score.saturating_add(count.saturating_mul(tier.weight()));
            match tier {
                KeywordTier::High => high_hits = high_hits.saturating_add(count),
                KeywordTier::Medium => medium_hits = medium_hits.saturating_add(count),
            }
            keyword_hits.push(KeywordHit {
                keyword: phrase.to_string(),
                tier,
                count,
            });
        }

        RiskResult::new(
            self.thresholds.classify(score),
            score,
            high_hits,
            medium_hits,
            keyword_hits,
        )
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::with_shared(RiskKeywordSet::shared_default(), RiskThresholds::default())
    }
}

/// Scores `text` with the built-in table and default thresholds.
pub fn score(text: &str) -> RiskResult {
    RiskScorer::default().score(text)
}
