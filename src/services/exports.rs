//! BIM/solver export stage.
//!
//! Emits placeholder artifact links for the supported interchange formats.
//! Links embed the project id; actual geometry export lands with the solver
//! container integration.

use crate::models::{ExportArtifact, Project};

const BASE_URL: &str = "https://example.com/mock/export";

fn artifact(project: &Project, format: &str, schema: &str, file: &str, notes: &str) -> ExportArtifact {
    ExportArtifact {
        format: format.to_string(),
        schema: schema.to_string(),
        download_url: format!("{}/{}/{}", BASE_URL, project.id, file),
        notes: notes.to_string(),
    }
}

/// Produce export artifacts for the project.
pub fn export_artifacts(project: &Project) -> Vec<ExportArtifact> {
    vec![
        artifact(
            project,
            "ifc",
            "IFC4",
            "model.ifc",
            "Aggregated layout and skeleton geometry",
        ),
        artifact(
            project,
            "rvt",
            "Revit 2024",
            "model.rvt",
            "Placeholder link for BIM handoff",
        ),
        artifact(
            project,
            "kratos-json",
            "Kratos structural",
            "kratos.json",
            "Ready for solver container once connectivity is enabled",
        ),
    ]
}
