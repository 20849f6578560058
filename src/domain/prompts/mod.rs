//! Prompt Builder - system/user prompt pairs for narrative generation.
//!
//! Pure and deterministic: identical inputs always produce byte-identical
//! prompt pairs, and nothing here touches the network.
//!
//! # Components
//!
//! - `PromptKind` - Summary guidance or leadership script, with its sampling profile
//! - `PromptPair` - The system and user prompt sent together to a model
//! - `build_prompt` - Sanitizes text and fills the kind's templates

mod sanitize;
mod templates;

pub use sanitize::sanitize_user_text;
pub use templates::system_prompt_for;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::project::ProjectContext;

/// Which narrative to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Analytical summary plus three recommended actions.
    SummaryGuidance,
    /// Short spoken script for the next team check-in.
    LeadershipScript,
}

impl PromptKind {
    /// Sampling temperature used for this kind.
    pub fn temperature(&self) -> f32 {
        match self {
            PromptKind::SummaryGuidance => 0.3,
            PromptKind::LeadershipScript => 0.4,
        }
    }

    /// Output token cap used for this kind.
    pub fn max_output_tokens(&self) -> u32 {
        match self {
            PromptKind::SummaryGuidance => 500,
            PromptKind::LeadershipScript => 400,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::SummaryGuidance => "summary guidance",
            PromptKind::LeadershipScript => "leadership script",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// System instructions plus user content for one model call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Builds the prompt pair for `kind` from raw `text` and `context`.
///
/// Angle brackets in the text and the project name are escaped before
/// interpolation.
pub fn build_prompt(kind: PromptKind, text: &str, context: &ProjectContext) -> PromptPair {
    let text = sanitize_user_text(text);
    let name = sanitize_user_text(&context.name);

    PromptPair {
        system_prompt: system_prompt_for(kind).to_string(),
        user_prompt: templates::user_prompt_for(kind, &name, context, &text),
    }
}
