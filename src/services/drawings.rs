//! Drawing sheet generation stage.
//!
//! Produces the standard sheet set with mock download links. Links embed the
//! project id so clients can correlate sheets with records; no files are
//! rendered behind them.

use crate::models::{DrawingSheet, Project};

const BASE_URL: &str = "https://example.com/mock";

fn sheet(
    project: &Project,
    name: &str,
    discipline: &str,
    format: &str,
    file: &str,
    notes: &str,
) -> DrawingSheet {
    DrawingSheet {
        name: name.to_string(),
        discipline: discipline.to_string(),
        format: format.to_string(),
        download_url: format!("{}/{}/{}", BASE_URL, project.id, file),
        notes: notes.to_string(),
    }
}

/// Generate the standard drawing set for a project.
pub fn generate_drawings(project: &Project) -> Vec<DrawingSheet> {
    vec![
        sheet(
            project,
            "Architectural floor plan",
            "architecture",
            "pdf",
            "arch_plan.pdf",
            "AI-seeded layout with circulation and parking",
        ),
        sheet(
            project,
            "Structural GA",
            "structure",
            "pdf",
            "structural_ga.pdf",
            "Column grid, beams, slab type per skeleton",
        ),
        sheet(
            project,
            "Rebar schedule",
            "structure",
            "csv",
            "rebar_schedule.csv",
            "Deterministic bar marks for illustration",
        ),
        sheet(
            project,
            "Execution Gantt",
            "execution",
            "pdf",
            "gantt.pdf",
            "Derived from execution tasks",
        ),
    ]
}
