//! Risk level classification and the advice attached to each level.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Score at or above which a text is classified as high risk.
pub const DEFAULT_HIGH_THRESHOLD: u32 = 6;

/// Score at or above which a text is classified as medium risk.
pub const DEFAULT_MEDIUM_THRESHOLD: u32 = 3;

/// Detected resistance intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Fixed advisory message shown with the level.
    pub fn message(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "There are strong signs of resistance or stress. You may need direct interventions soon."
            }
            RiskLevel::Medium => {
                "Some early warning signs are present. This is a good time to clarify benefits and listen to concerns."
            }
            RiskLevel::Low => {
                "No obvious resistance signals detected from the text. Still keep an eye on morale."
            }
        }
    }

    /// Suggested next steps for a manager at this level.
    pub fn next_steps(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => HIGH_NEXT_STEPS,
            RiskLevel::Medium => MEDIUM_NEXT_STEPS,
            RiskLevel::Low => LOW_NEXT_STEPS,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const HIGH_NEXT_STEPS: &[&str] = &[
    "Schedule 1:1s with key influencers or vocal resisters.",
    "Run a short listening session: \"What's hardest about this change right now?\"",
    "Agree on 1-2 quick wins to show that feedback leads to action.",
];

const MEDIUM_NEXT_STEPS: &[&str] = &[
    "Clarify the why behind the transformation in concrete, practical terms.",
    "Ask team leads to surface questions anonymously (e.g. via a simple form).",
    "Share a small success story or quick win from the project.",
];

const LOW_NEXT_STEPS: &[&str] = &[
    "Keep communicating progress in simple, human language.",
    "Highlight small wins and recognise early adopters.",
    "Check in regularly; low risk doesn't mean no risk.",
];

/// Score boundaries between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high: u32,
    pub medium: u32,
}

impl RiskThresholds {
    /// Creates thresholds, requiring `0 < medium < high`.
    pub fn try_new(high: u32, medium: u32) -> Result<Self, ValidationError> {
        if medium == 0 {
            return Err(ValidationError::out_of_range(
                "medium_threshold",
                1,
                high.saturating_sub(1) as i32,
                0,
            ));
        }
        if medium >= high {
            return Err(ValidationError::invalid_format(
                "high_threshold",
                format!("must be greater than medium threshold {}", medium),
            ));
        }
        Ok(Self { high, medium })
    }

    /// Maps a score onto a level.
    pub fn classify(&self, score: u32) -> RiskLevel {
        if score >= self.high {
            RiskLevel::High
        } else if score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}
