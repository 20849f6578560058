//! LLM Gateway Port - Interface for hosted text-generation models.
//!
//! The application layer hands a [`PromptPair`] and sampling options to an
//! implementation of this port and gets generated text back. Implementations
//! make exactly one attempt per call; failures are surfaced to the caller
//! unchanged.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoGateway;
//!
//! #[async_trait]
//! impl LlmGateway for EchoGateway {
//!     async fn generate(
//!         &self,
//!         prompt: &PromptPair,
//!         options: &GenerationOptions,
//!     ) -> Result<GatewayResponse, GatewayError> {
//!         Ok(GatewayResponse::new(prompt.user_prompt.clone(), &options.model))
//!     }
//!
//!     fn gateway_info(&self) -> GatewayInfo {
//!         GatewayInfo::new("echo", "echo-1")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::prompts::{PromptKind, PromptPair};

/// Port for text-generation model calls.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generates text for a prompt pair with the given sampling options.
    async fn generate(
        &self,
        prompt: &PromptPair,
        options: &GenerationOptions,
    ) -> Result<GatewayResponse, GatewayError>;

    /// Gateway name and default model.
    fn gateway_info(&self) -> GatewayInfo;
}

/// Sampling options for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
    /// Correlation id for logs.
    pub trace_id: String,
}

impl GenerationOptions {
    /// Creates options with explicit values.
    pub fn new(model: impl Into<String>, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_output_tokens,
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Creates the fixed sampling profile for a prompt kind.
    pub fn for_kind(kind: PromptKind, model: impl Into<String>) -> Self {
        Self::new(model, kind.temperature(), kind.max_output_tokens())
    }

    /// Sets the trace id.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }
}

/// Generated text returned by a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// Generated content.
    pub text: String,
    /// Model that produced the text.
    pub model: String,
}

impl GatewayResponse {
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
        }
    }
}

/// Gateway name and model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayInfo {
    /// Gateway name (e.g., "openai").
    pub name: String,
    /// Default model identifier.
    pub model: String,
}

impl GatewayInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Failures originating from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Rate limited or quota exhausted.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until a retry is sensible.
        retry_after_secs: u32,
    },

    /// Missing or rejected credential.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be understood.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl GatewayError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// True when the user may reasonably try the same action again later.
    ///
    /// The core never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayError::RateLimited { .. }
                | GatewayError::Unavailable { .. }
                | GatewayError::Network(_)
                | GatewayError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_for_summary_kind() {
        let options = GenerationOptions::for_kind(PromptKind::SummaryGuidance, "gpt-4o-mini");

        assert_eq!(options.model, "gpt-4o-mini");
        assert_eq!(options.temperature, 0.3);
        assert_eq!(options.max_output_tokens, 500);
        assert!(!options.trace_id.is_empty());
    }

    #[test]
    fn options_for_script_kind() {
        let options = GenerationOptions::for_kind(PromptKind::LeadershipScript, "gpt-4o-mini");

        assert_eq!(options.temperature, 0.4);
        assert_eq!(options.max_output_tokens, 400);
    }

    #[test]
    fn options_trace_id_override() {
        let options = GenerationOptions::new("m", 0.1, 10).with_trace_id("trace-123");
        assert_eq!(options.trace_id, "trace-123");
    }

    #[test]
    fn gateway_error_retryable_classification() {
        assert!(GatewayError::rate_limited(30).is_retryable());
        assert!(GatewayError::unavailable("down").is_retryable());
        assert!(GatewayError::network("reset").is_retryable());
        assert!(GatewayError::Timeout { timeout_secs: 30 }.is_retryable());

        assert!(!GatewayError::AuthenticationFailed.is_retryable());
        assert!(!GatewayError::malformed("no choices").is_retryable());
        assert!(!GatewayError::InvalidRequest("bad".to_string()).is_retryable());
    }

    #[test]
    fn gateway_error_displays_correctly() {
        assert_eq!(
            GatewayError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            GatewayError::malformed("no choices").to_string(),
            "malformed response: no choices"
        );
        assert_eq!(
            GatewayError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }
}
