//! Risk register stage.

use crate::models::RiskItem;

fn risk(name: &str, severity: &str, impact: &str, mitigation: &str) -> RiskItem {
    RiskItem {
        name: name.to_string(),
        severity: severity.to_string(),
        impact: impact.to_string(),
        mitigation: mitigation.to_string(),
    }
}

/// Seed the standing risk register for a new project.
pub fn risk_register() -> Vec<RiskItem> {
    vec![
        risk(
            "Geotechnical uncertainty",
            "medium",
            "cost",
            "Request soil report; switch to raft footing if soft soil",
        ),
        risk(
            "Supply chain",
            "medium",
            "schedule",
            "Lock rates and buffers in BOQ; prefer local vendors",
        ),
        risk(
            "Regulatory approvals",
            "low",
            "schedule",
            "Provide drawings in mandated formats; track approval tasks",
        ),
    ]
}
