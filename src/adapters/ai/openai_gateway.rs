//! OpenAI Gateway - Implementation of LlmGateway for OpenAI's chat completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let gateway = OpenAIGateway::new(config)?;
//! ```
//!
//! One HTTP request per `generate` call. Failures are mapped onto
//! `GatewayError` and returned as-is.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::prompts::PromptPair;
use crate::ports::{GatewayError, GatewayInfo, GatewayResponse, GenerationOptions, LlmGateway};

/// Default model used when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default API root.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI gateway.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication. May be empty; calls then fail without a request.
    api_key: Secret<String>,
    /// Default model (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// True if a non-blank API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API gateway implementation.
pub struct OpenAIGateway {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIGateway {
    /// Creates a new gateway with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts a prompt pair to OpenAI's request format.
    fn to_openai_request(prompt: &PromptPair, options: &GenerationOptions) -> OpenAIRequest {
        OpenAIRequest {
            model: options.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: prompt.system_prompt.clone(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: prompt.user_prompt.clone(),
                },
            ],
            max_tokens: options.max_output_tokens,
            temperature: options.temperature,
        }
    }

    async fn send_request(
        &self,
        prompt: &PromptPair,
        options: &GenerationOptions,
    ) -> Result<Response, GatewayError> {
        let body = Self::to_openai_request(prompt, options);

        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GatewayError::network(format!("Connection failed: {}", e))
                } else {
                    GatewayError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses onto gateway errors.
    async fn handle_response_status(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(GatewayError::AuthenticationFailed),
            429 => Err(GatewayError::rate_limited(Self::parse_retry_after(&error_body))),
            400 | 404 | 422 => Err(GatewayError::InvalidRequest(error_body)),
            500..=599 => Err(GatewayError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GatewayError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses the wait from "try again in 20s" / "1.5s" / "20ms" / "6m0s",
    /// rounded up to whole seconds (at least 1). Defaults to 30 seconds.
    fn parse_retry_after(error_body: &str) -> u32 {
        let message = serde_json::from_str::<serde_json::Value>(error_body)
            .ok()
            .and_then(|v| v.get("error")?.get("message")?.as_str().map(str::to_string));

        message
            .as_deref()
            .and_then(|msg| {
                let idx = msg.find("try again in ")?;
                parse_wait_millis(&msg[idx + "try again in ".len()..])
            })
            .map(|millis| (millis / 1000.0).ceil().clamp(1.0, u32::MAX as f64) as u32)
            .unwrap_or(30)
    }

    /// Extracts generated text from a successful body.
    fn parse_body(body: OpenAIResponse) -> Result<GatewayResponse, GatewayError> {
        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::malformed("No choices in response"))?;

        let text = choice
            .message
            .content
            .ok_or_else(|| GatewayError::malformed("Choice has no content"))?;

        Ok(GatewayResponse::new(text.trim(), body.model))
    }
}

#[async_trait]
impl LlmGateway for OpenAIGateway {
    async fn generate(
        &self,
        prompt: &PromptPair,
        options: &GenerationOptions,
    ) -> Result<GatewayResponse, GatewayError> {
        if !self.config.has_api_key() {
            tracing::warn!(trace_id = %options.trace_id, "OpenAI API key is not configured");
            return Err(GatewayError::AuthenticationFailed);
        }

        tracing::debug!(
            trace_id = %options.trace_id,
            model = %options.model,
            temperature = options.temperature,
            max_output_tokens = options.max_output_tokens,
            "Sending chat completion request"
        );

        let response = self.send_request(prompt, options).await?;
        let response = Self::handle_response_status(response).await?;

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::malformed(format!("Failed to parse response: {}", e)))?;

        Self::parse_body(body)
    }

    fn gateway_info(&self) -> GatewayInfo {
        GatewayInfo::new("openai", &self.config.model)
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

/// Sums a Go-style duration prefix ("1m30s", "1.5s", "20ms") into milliseconds.
/// A bare number counts as seconds.
fn parse_wait_millis(text: &str) -> Option<f64> {
    let mut rest = text;
    let mut total = 0.0;
    let mut parsed = false;

    loop {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let Ok(value) = rest[..number_len].parse::<f64>() else {
            break;
        };
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let factor = match &rest[..unit_len] {
            "ms" => 1.0,
            "" | "s" => 1_000.0,
            "m" => 60_000.0,
            "h" => 3_600_000.0,
            _ => break,
        };
        total += value * factor;
        parsed = true;

        if unit_len == 0 {
            break;
        }
        rest = &rest[unit_len..];
    }

    parsed.then_some(total)
}
