//! Public API surface for the CivilForge backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::core::{HealthStatus, ModuleDescriptor, RequirementBrief};
pub use crate::models::project::{
    ComplianceCheck, DrawingSheet, EstimateLine, EstimateSummary, ExecutionTask, ExportArtifact,
    LayoutPlan, Project, ProjectRequest, RequestValidationError, RiskItem, RoomSpec, Staircase,
    StructuralSkeleton, Usage,
};

use serde::{Deserialize, Serialize};

/// Project identifier (UUIDv4 string, server-assigned).
///
/// Kept as an opaque string so that lookups with malformed ids behave like
/// lookups with unknown ids: the key is simply absent from the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl ProjectId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        ProjectId(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        ProjectId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

/// Lightweight project listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub project_id: ProjectId,
    pub title: String,
}
