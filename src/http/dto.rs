//! Data Transfer Objects for the HTTP API.
//!
//! Most payloads are re-exported from the model layer since they already
//! derive Serialize/Deserialize; only list/banner wrappers live here.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    ComplianceCheck, DrawingSheet, EstimateLine, EstimateSummary, ExecutionTask, ExportArtifact,
    LayoutPlan, Project, ProjectInfo, ProjectRequest, RiskItem, RoomSpec, StructuralSkeleton,
};
pub use crate::models::{HealthStatus, ModuleDescriptor, RequirementBrief};

/// Banner returned at the service root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBanner {
    /// Human-readable service greeting
    pub message: String,
    /// Crate version
    pub version: String,
    /// Deployment environment name
    pub environment: String,
}

/// Response for the project list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    /// Id/title pairs, sorted by title
    pub projects: Vec<ProjectInfo>,
    /// Total number of stored projects
    pub total: usize,
}
