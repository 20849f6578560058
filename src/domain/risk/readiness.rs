//! Manager readiness indicator (display-only percentage).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Readiness penalty applied per score point.
const PENALTY_PER_POINT: u32 = 12;

/// Maximum total penalty; keeps readiness at or above 10.
const MAX_PENALTY: u32 = 90;

/// Percentage in `[10, 100]` derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Readiness(u8);

impl Readiness {
    /// Lowest reachable readiness.
    pub const FLOOR: Self = Self(10);

    /// Readiness when no risk signals are present.
    pub const FULL: Self = Self(100);

    /// Computes `100 - min(score * 12, 90)`.
    pub fn from_score(score: u32) -> Self {
        let penalty = score.saturating_mul(PENALTY_PER_POINT).min(MAX_PENALTY);
        Self((100 - penalty) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
