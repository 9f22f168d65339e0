//! Execution planning stage.

use crate::models::ExecutionTask;

/// Baseline WBS: fixed durations with a linear dependency chain.
const SEQUENCE: [(&str, u32, &[&str]); 6] = [
    ("Mobilization", 7, &[]),
    ("Foundations", 21, &["Mobilization"]),
    ("Superstructure", 45, &["Foundations"]),
    ("Roofing", 14, &["Superstructure"]),
    ("Finishes", 30, &["Roofing"]),
    ("Handover", 5, &["Finishes"]),
];

/// Produce the baseline execution plan.
pub fn execution_plan() -> Vec<ExecutionTask> {
    SEQUENCE
        .iter()
        .map(|&(name, duration_days, dependencies)| ExecutionTask {
            name: name.to_string(),
            duration_days,
            dependencies: dependencies.iter().map(|&dep| dep.to_string()).collect(),
        })
        .collect()
}
