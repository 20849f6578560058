//! GenerateNarrativeHandler - Command handler for LLM summaries and scripts.
//!
//! Builds the prompt pair for the requested kind, makes exactly one gateway
//! call with that kind's sampling profile, and returns the text. Gateway
//! failures come back unchanged inside `NarrativeError::Gateway`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::project::ProjectContext;
use crate::domain::prompts::{build_prompt, PromptKind};
use crate::ports::{GatewayError, GenerationOptions, LlmGateway};

/// Command to generate a narrative for pasted communications.
#[derive(Debug, Clone)]
pub struct GenerateNarrativeCommand {
    /// Which narrative to produce.
    pub kind: PromptKind,
    /// Raw team communications.
    pub text: String,
    /// Project the communications relate to.
    pub context: ProjectContext,
}

impl GenerateNarrativeCommand {
    /// Creates a command for an analytical summary with three actions.
    pub fn summary_guidance(text: impl Into<String>, context: ProjectContext) -> Self {
        Self {
            kind: PromptKind::SummaryGuidance,
            text: text.into(),
            context,
        }
    }

    /// Creates a command for a spoken leadership script.
    pub fn leadership_script(text: impl Into<String>, context: ProjectContext) -> Self {
        Self {
            kind: PromptKind::LeadershipScript,
            text: text.into(),
            context,
        }
    }
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeResult {
    /// The kind that was generated.
    pub kind: PromptKind,
    /// Generated text.
    pub content: String,
    /// Model that produced the text.
    pub model: String,
    /// Display caption of the project the text was generated for.
    pub project: String,
    pub generated_at: DateTime<Utc>,
}

/// Error type for narrative generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    /// Nothing to analyse; the gateway was not called.
    #[error("Please paste some notes first")]
    EmptyInput,

    /// The gateway call failed.
    #[error("Text generation failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// Handler for summary-guidance and leadership-script generation.
///
/// # Dependencies
///
/// - `LlmGateway`: the hosted model
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateNarrativeHandler::new(gateway, "gpt-4o-mini");
/// let cmd = GenerateNarrativeCommand::leadership_script(notes, context);
/// let script = handler.handle(cmd).await?;
/// ```
pub struct GenerateNarrativeHandler {
    gateway: Arc<dyn LlmGateway>,
    model: String,
}

impl GenerateNarrativeHandler {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateNarrativeCommand,
    ) -> Result<NarrativeResult, NarrativeError> {
        if cmd.text.trim().is_empty() {
            return Err(NarrativeError::EmptyInput);
        }

        let prompt = build_prompt(cmd.kind, &cmd.text, &cmd.context);
        let options = GenerationOptions::for_kind(cmd.kind, self.model.clone());

        tracing::info!(
            trace_id = %options.trace_id,
            kind = %cmd.kind,
            project = %cmd.context.name,
            text_len = cmd.text.len(),
            "Requesting narrative"
        );

        let response = self
            .gateway
            .generate(&prompt, &options)
            .await
            .map_err(|err| {
                tracing::warn!(
                    trace_id = %options.trace_id,
                    kind = %cmd.kind,
                    error = %err,
                    "Narrative generation failed"
                );
                err
            })?;

        Ok(NarrativeResult {
            kind: cmd.kind,
            content: response.text,
            model: response.model,
            project: cmd.context.caption(),
            generated_at: Utc::now(),
        })
    }
}
