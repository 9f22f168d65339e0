//! End-to-end seeding pipeline.
//!
//! Runs every derivation stage against a fresh project so a single intake
//! call yields a fully populated record. Individual stages stay callable on
//! their own for reruns after brief edits.

use crate::models::{Project, ProjectRequest};

use super::{
    compliance_checks, derive_structure, estimate_cost, execution_plan, export_artifacts,
    generate_drawings, propose_layout, risk_register,
};

/// Create a project from a brief and run the full derivation pipeline.
pub fn seed_project(request: ProjectRequest) -> Project {
    let mut project = Project::new(request);

    let layout = propose_layout(&project.request());
    project.layout = Some(layout);

    let skeleton = derive_structure(&project);
    project.skeleton = Some(skeleton);

    let estimate = estimate_cost(&project);
    project.estimate = Some(estimate);

    project.execution_plan = execution_plan();

    let drawings = generate_drawings(&project);
    project.drawings = drawings;

    let compliance = compliance_checks(&project);
    project.compliance = compliance;

    let exports = export_artifacts(&project);
    project.exports = exports;

    project.risks = risk_register();

    project
}
