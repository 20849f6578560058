//! Risk Module - Keyword-based resistance scanning.
//!
//! Pure, synchronous and total: every string scores, nothing here performs
//! I/O or fails at runtime.
//!
//! # Components
//!
//! - `RiskKeywordSet` - High/medium phrase tables, built in or loaded from YAML
//! - `RiskThresholds` - Score boundaries between levels (6 / 3 by default)
//! - `RiskScorer` - Counts phrase occurrences and classifies the score
//! - `RiskResult` - Immutable scan output, including per-keyword hits
//! - `Readiness` - Display-only manager readiness percentage

mod keywords;
mod level;
mod readiness;
mod result;
mod scorer;

pub use keywords::{
    KeywordTableError, KeywordTier, RiskKeywordSet, DEFAULT_HIGH_RISK_KEYWORDS,
    DEFAULT_MEDIUM_RISK_KEYWORDS,
};
pub use level::{RiskLevel, RiskThresholds, DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
pub use readiness::Readiness;
pub use result::{KeywordHit, RiskResult};
pub use scorer::{score, RiskScorer};
