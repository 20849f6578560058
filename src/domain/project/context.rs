//! ProjectContext value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of organizational change being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationType {
    #[default]
    SystemRollout,
    OrgRestructure,
    PolicyChange,
    ProcessChange,
    Other,
}

impl TransformationType {
    pub fn label(&self) -> &'static str {
        match self {
            TransformationType::SystemRollout => "System rollout",
            TransformationType::OrgRestructure => "Org restructure",
            TransformationType::PolicyChange => "Policy change",
            TransformationType::ProcessChange => "Process change",
            TransformationType::Other => "Other",
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the project currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    #[default]
    Planning,
    Pilot,
    Rollout,
    Stabilisation,
}

impl ProjectPhase {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectPhase::Planning => "Planning",
            ProjectPhase::Pilot => "Pilot",
            ProjectPhase::Rollout => "Rollout",
            ProjectPhase::Stabilisation => "Stabilisation",
        }
    }
}

impl fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name, type and phase of the transformation being discussed.
///
/// Has no lifecycle of its own; callers build one per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub name: String,
    pub transformation_type: TransformationType,
    pub phase: ProjectPhase,
}

impl ProjectContext {
    pub fn new(
        name: impl Into<String>,
        transformation_type: TransformationType,
        phase: ProjectPhase,
    ) -> Self {
        Self {
            name: name.into(),
            transformation_type,
            phase,
        }
    }

    /// One-line display caption, e.g. "Project: Payroll (Policy change, phase: Pilot)".
    pub fn caption(&self) -> String {
        format!(
            "Project: {} ({}, phase: {})",
            self.name, self.transformation_type, self.phase
        )
    }
}

impl Default for ProjectContext {
    fn default() -> Self {
        Self::new(
            "Finance System Rollout",
            TransformationType::default(),
            ProjectPhase::default(),
        )
    }
}
