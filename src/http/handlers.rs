//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the pipeline stages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ComplianceCheck, DrawingSheet, ExportArtifact, HealthStatus, LayoutPlan, ModuleDescriptor,
    Project, ProjectListResponse, ProjectRequest, RequirementBrief, RiskItem, ServiceBanner,
    StructuralSkeleton,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::ProjectId;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for handlers that answer 201 Created.
pub type CreatedResult<T> = Result<(StatusCode, Json<T>), AppError>;

/// Platform module catalog served by the health endpoint.
pub(crate) fn module_catalog() -> Vec<ModuleDescriptor> {
    vec![
        ModuleDescriptor::new(
            "requirement_engine",
            "AI Requirement Engine",
            "Conversational capture of building briefs and constraints",
            "freemium + per-project",
            "m1",
        ),
        ModuleDescriptor::new(
            "layout_generator",
            "Layout Generator",
            "Template- and AI-based architectural layouts with export",
            "per-layout",
            "m2",
        ),
        ModuleDescriptor::new(
            "structural_engine",
            "Structural Analysis & Design",
            "Kratos-backed solver orchestration with IS/ACI/AISC checks",
            "per-structure",
            "m3",
        ),
        ModuleDescriptor::new(
            "drawings",
            "Drawings & Detailing",
            "Auto-generated plans, rebar, and shop drawings with provenance",
            "per-sheet",
            "m4",
        ),
        ModuleDescriptor::new(
            "estimation",
            "Estimation & BOQ",
            "SSR/SOR-based costing with scenarios and exports",
            "per-project",
            "m5",
        ),
        ModuleDescriptor::new(
            "execution",
            "Project Execution",
            "WBS, Gantt, QA/QC, safety, and site reporting workflows",
            "subscription",
            "m6",
        ),
    ]
}

// =============================================================================
// Service Metadata
// =============================================================================

/// GET /
///
/// Service banner with version and environment, useful as a liveness probe.
pub async fn root(State(state): State<AppState>) -> HandlerResult<ServiceBanner> {
    Ok(Json(ServiceBanner {
        message: format!("{} backend scaffold active", state.settings.app_name),
        version: state.settings.version.clone(),
        environment: state.settings.environment.clone(),
    }))
}

/// GET /api/health
///
/// Health check with the platform module catalog.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthStatus> {
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
        environment: state.settings.environment.clone(),
        version: state.settings.version.clone(),
        modules: module_catalog(),
    }))
}

// =============================================================================
// Briefs
// =============================================================================

/// POST /api/briefs
///
/// Echo the captured brief; persistence will be added once storage is wired.
pub async fn capture_brief(Json(brief): Json<RequirementBrief>) -> CreatedResult<RequirementBrief> {
    Ok((StatusCode::CREATED, Json(brief)))
}

// =============================================================================
// Project CRUD
// =============================================================================

/// POST /api/projects
///
/// Seed a project from a requirement brief and run the full pipeline.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<ProjectRequest>,
) -> CreatedResult<Project> {
    request.validate()?;

    let project = services::seed_project(request);
    state.store.insert(project.clone());

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
///
/// List all stored projects.
pub async fn list_projects(State(state): State<AppState>) -> HandlerResult<ProjectListResponse> {
    let projects = state.store.list();
    let total = projects.len();

    Ok(Json(ProjectListResponse { projects, total }))
}

/// GET /api/projects/{project_id}
///
/// Fetch a project by id.
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> HandlerResult<Project> {
    let project = state.store.fetch(&project_id)?;
    Ok(Json(project))
}

// =============================================================================
// Pipeline Stages
// =============================================================================

/// POST /api/projects/{project_id}/layout
///
/// Rerun the layout proposal from the stored brief fields.
pub async fn generate_layout(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<LayoutPlan> {
    let layout = state.store.update_with(&project_id, |project| {
        let layout = services::propose_layout(&project.request());
        project.layout = Some(layout.clone());
        layout
    })?;

    Ok((StatusCode::CREATED, Json(layout)))
}

/// POST /api/projects/{project_id}/structure
///
/// Rerun the structural skeleton derivation.
pub async fn generate_structure(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<StructuralSkeleton> {
    let skeleton = state.store.update_with(&project_id, |project| {
        let skeleton = services::derive_structure(project);
        project.skeleton = Some(skeleton.clone());
        skeleton
    })?;

    Ok((StatusCode::CREATED, Json(skeleton)))
}

/// POST /api/projects/{project_id}/estimate
///
/// Refresh the estimate and the execution plan, returning the whole record.
pub async fn generate_estimate(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<Project> {
    let project = state.store.update_with(&project_id, |project| {
        let estimate = services::estimate_cost(project);
        project.estimate = Some(estimate);
        project.execution_plan = services::execution_plan();
        project.clone()
    })?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /api/projects/{project_id}/drawings
///
/// Regenerate the drawing set.
pub async fn generate_drawings(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<Vec<DrawingSheet>> {
    let sheets = state.store.update_with(&project_id, |project| {
        let sheets = services::generate_drawings(project);
        project.drawings = sheets.clone();
        sheets
    })?;

    Ok((StatusCode::CREATED, Json(sheets)))
}

/// POST /api/projects/{project_id}/compliance
///
/// Rerun compliance checks against the preferred codes.
pub async fn run_compliance(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<Vec<ComplianceCheck>> {
    let checks = state.store.update_with(&project_id, |project| {
        let checks = services::compliance_checks(project);
        project.compliance = checks.clone();
        checks
    })?;

    Ok((StatusCode::CREATED, Json(checks)))
}

/// POST /api/projects/{project_id}/exports
///
/// Regenerate the export artifact links.
pub async fn generate_exports(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<Vec<ExportArtifact>> {
    let artifacts = state.store.update_with(&project_id, |project| {
        let artifacts = services::export_artifacts(project);
        project.exports = artifacts.clone();
        artifacts
    })?;

    Ok((StatusCode::CREATED, Json(artifacts)))
}

/// POST /api/projects/{project_id}/risks
///
/// Reset the risk register to the standing entries.
pub async fn refresh_risks(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> CreatedResult<Vec<RiskItem>> {
    let risks = state.store.update_with(&project_id, |project| {
        let risks = services::risk_register();
        project.risks = risks.clone();
        risks
    })?;

    Ok((StatusCode::CREATED, Json(risks)))
}
