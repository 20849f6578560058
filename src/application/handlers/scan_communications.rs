//! ScanCommunicationsHandler - Command handler for keyword risk scans.
//!
//! Refuses blank input, otherwise delegates to the domain scorer. No I/O.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::risk::{RiskResult, RiskScorer};

/// Command to scan pasted team communications.
#[derive(Debug, Clone)]
pub struct ScanCommunicationsCommand {
    /// Raw meeting notes, emails or chat snippets.
    pub text: String,
}

impl ScanCommunicationsCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Error type for scans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Nothing to analyse.
    #[error("Please paste some notes first")]
    EmptyInput,
}

/// Handler for risk scans.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = ScanCommunicationsHandler::new(Arc::new(RiskScorer::default()));
/// let result = handler.handle(ScanCommunicationsCommand::new(notes))?;
/// println!("{} ({})", result.level(), result.score());
/// ```
pub struct ScanCommunicationsHandler {
    scorer: Arc<RiskScorer>,
}

impl ScanCommunicationsHandler {
    pub fn new(scorer: Arc<RiskScorer>) -> Self {
        Self { scorer }
    }

    pub fn handle(&self, cmd: ScanCommunicationsCommand) -> Result<RiskResult, ScanError> {
        if cmd.text.trim().is_empty() {
            tracing::debug!("Refusing scan of empty input");
            return Err(ScanError::EmptyInput);
        }

        let result = self.scorer.score(&cmd.text);

        tracing::info!(
            text_len = cmd.text.len(),
            score = result.score(),
            level = %result.level(),
            high_hits = result.high_hits(),
            medium_hits = result.medium_hits(),
            "Communications scanned"
        );

        Ok(result)
    }
}
