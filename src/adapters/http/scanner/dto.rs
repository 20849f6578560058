//! HTTP DTOs for scanner endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::NarrativeResult;
use crate::domain::project::{ProjectContext, ProjectPhase, TransformationType};
use crate::domain::prompts::PromptKind;
use crate::domain::risk::{KeywordHit, RiskLevel, RiskResult};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /api/scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub text: String,
}

/// Project block of a narrative request; missing fields take the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectContextDto {
    pub name: String,
    pub transformation_type: TransformationType,
    pub phase: ProjectPhase,
}

impl Default for ProjectContextDto {
    fn default() -> Self {
        let context = ProjectContext::default();
        Self {
            name: context.name,
            transformation_type: context.transformation_type,
            phase: context.phase,
        }
    }
}

impl From<ProjectContextDto> for ProjectContext {
    fn from(dto: ProjectContextDto) -> Self {
        ProjectContext::new(dto.name, dto.transformation_type, dto.phase)
    }
}

/// Body for `POST /api/guidance/summary` and `POST /api/guidance/script`.
#[derive(Debug, Clone, Deserialize)]
pub struct NarrativeRequest {
    pub text: String,
    #[serde(default)]
    pub project: ProjectContextDto,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Risk snapshot returned by `POST /api/scan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub level: RiskLevel,
    pub score: u32,
    pub high_hits: u32,
    pub medium_hits: u32,
    pub readiness: u8,
    pub message: String,
    pub next_steps: Vec<String>,
    pub keyword_hits: Vec<KeywordHit>,
}

impl From<&RiskResult> for ScanResponse {
    fn from(result: &RiskResult) -> Self {
        Self {
            level: result.level(),
            score: result.score(),
            high_hits: result.high_hits(),
            medium_hits: result.medium_hits(),
            readiness: result.readiness().value(),
            message: result.message().to_string(),
            next_steps: result
                .level()
                .next_steps()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            keyword_hits: result.keyword_hits().to_vec(),
        }
    }
}

/// Generated narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeResponse {
    pub kind: PromptKind,
    pub content: String,
    pub model: String,
    pub project: String,
    pub generated_at: DateTime<Utc>,
}

impl From<NarrativeResult> for NarrativeResponse {
    fn from(result: NarrativeResult) -> Self {
        Self {
            kind: result.kind,
            content: result.content,
            model: result.model,
            project: result.project,
            generated_at: result.generated_at,
        }
    }
}

/// Liveness body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            retryable: None,
        }
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::score;
    use serde_json::json;

    #[test]
    fn scan_response_includes_next_steps_and_hits() {
        let response = ScanResponse::from(&score("They refuse, they resist and are angry."));

        assert_eq!(response.level, RiskLevel::High);
        assert_eq!(response.score, 6);
        assert_eq!(response.readiness, 28);
        assert_eq!(response.next_steps.len(), 3);
        assert_eq!(response.keyword_hits.len(), 3);
    }

    #[test]
    fn narrative_request_uses_default_project() {
        let request: NarrativeRequest = serde_json::from_value(json!({ "text": "hi" })).unwrap();
        let context: ProjectContext = request.project.into();
        assert_eq!(context, ProjectContext::default());
    }

    #[test]
    fn narrative_request_fills_missing_project_fields() {
        let request: NarrativeRequest = serde_json::from_value(json!({
            "text": "hi",
            "project": { "name": "Payroll", "phase": "pilot" }
        }))
        .unwrap();

        let context: ProjectContext = request.project.into();
        assert_eq!(context.name, "Payroll");
        assert_eq!(context.phase, ProjectPhase::Pilot);
        assert_eq!(context.transformation_type, TransformationType::SystemRollout);
    }

    #[test]
    fn error_response_omits_unset_retryable() {
        let json = serde_json::to_value(ErrorResponse::new("EMPTY_INPUT", "empty")).unwrap();
        assert_eq!(json, json!({ "code": "EMPTY_INPUT", "message": "empty" }));
    }
}
