//! HTTP handlers for scanner endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    GenerateNarrativeCommand, GenerateNarrativeHandler, NarrativeError, ScanCommunicationsCommand,
    ScanCommunicationsHandler, ScanError,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::risk::RiskScorer;
use crate::ports::{GatewayError, LlmGateway};

use super::dto::{
    ErrorResponse, HealthResponse, NarrativeRequest, NarrativeResponse, ScanRequest, ScanResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Scanner API error that implements IntoResponse.
#[derive(Debug)]
pub enum ScannerApiError {
    EmptyInput(String),
    Gateway(GatewayError),
}

impl IntoResponse for ScannerApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ScannerApiError::EmptyInput(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::EmptyInput, msg),
            ),
            ScannerApiError::Gateway(err) => {
                let retryable = err.is_retryable();
                let (status, code) = match &err {
                    GatewayError::RateLimited { .. } => {
                        (StatusCode::TOO_MANY_REQUESTS, ErrorCode::RateLimited)
                    }
                    _ => (StatusCode::BAD_GATEWAY, ErrorCode::GatewayFailed),
                };
                (
                    status,
                    ErrorResponse::new(code, err.to_string()).with_retryable(retryable),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ScanError> for ScannerApiError {
    fn from(error: ScanError) -> Self {
        match error {
            ScanError::EmptyInput => ScannerApiError::EmptyInput(ScanError::EmptyInput.to_string()),
        }
    }
}

impl From<NarrativeError> for ScannerApiError {
    fn from(error: NarrativeError) -> Self {
        match error {
            NarrativeError::EmptyInput => {
                ScannerApiError::EmptyInput(NarrativeError::EmptyInput.to_string())
            }
            NarrativeError::Gateway(err) => ScannerApiError::Gateway(err),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state: the scorer and the gateway. Both are read-only.
#[derive(Clone)]
pub struct ScannerAppState {
    pub scorer: Arc<RiskScorer>,
    pub gateway: Arc<dyn LlmGateway>,
    pub model: String,
}

impl ScannerAppState {
    pub fn new(scorer: Arc<RiskScorer>, gateway: Arc<dyn LlmGateway>, model: impl Into<String>) -> Self {
        Self {
            scorer,
            gateway,
            model: model.into(),
        }
    }

    pub fn scan_handler(&self) -> ScanCommunicationsHandler {
        ScanCommunicationsHandler::new(self.scorer.clone())
    }

    pub fn narrative_handler(&self) -> GenerateNarrativeHandler {
        GenerateNarrativeHandler::new(self.gateway.clone(), self.model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/scan
pub async fn scan_communications(
    State(state): State<ScannerAppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ScannerApiError> {
    let result = state
        .scan_handler()
        .handle(ScanCommunicationsCommand::new(request.text))?;

    Ok(Json(ScanResponse::from(&result)))
}

/// POST /api/guidance/summary
pub async fn generate_summary_guidance(
    State(state): State<ScannerAppState>,
    Json(request): Json<NarrativeRequest>,
) -> Result<Json<NarrativeResponse>, ScannerApiError> {
    let cmd = GenerateNarrativeCommand::summary_guidance(request.text, request.project.into());
    let result = state.narrative_handler().handle(cmd).await?;

    Ok(Json(result.into()))
}

/// POST /api/guidance/script
pub async fn generate_leadership_script(
    State(state): State<ScannerAppState>,
    Json(request): Json<NarrativeRequest>,
) -> Result<Json<NarrativeResponse>, ScannerApiError> {
    let cmd = GenerateNarrativeCommand::leadership_script(request.text, request.project.into());
    let result = state.narrative_handler().handle(cmd).await?;

    Ok(Json(result.into()))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
