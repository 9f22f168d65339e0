//! Code compliance stage.
//!
//! Runs placeholder serviceability checks against the project's preferred
//! design codes, plus a fixed fire-egress advisory. Real clause evaluation
//! arrives with the solver integration.

use crate::models::{ComplianceCheck, Project};

/// Codes checked when the brief names none.
const DEFAULT_CODES: [&str; 2] = ["IS 456", "IS 875"];

/// Run compliance checks for the project's preferred codes.
pub fn compliance_checks(project: &Project) -> Vec<ComplianceCheck> {
    let codes: Vec<&str> = if project.preferred_codes.is_empty() {
        DEFAULT_CODES.to_vec()
    } else {
        project.preferred_codes.iter().map(String::as_str).collect()
    };

    let mut checks: Vec<ComplianceCheck> = codes
        .into_iter()
        .map(|code| ComplianceCheck {
            code: code.to_string(),
            clause: "Serviceability".to_string(),
            status: "pass".to_string(),
            message: "Drift within limits using conservative defaults".to_string(),
            recommendation: "Validate with solver export once loads are finalized".to_string(),
        })
        .collect();

    checks.push(ComplianceCheck {
        code: "NBC Fire".to_string(),
        clause: "Means of egress".to_string(),
        status: "warning".to_string(),
        message: "Stair width assumed 1.2m; confirm occupancy and travel distance".to_string(),
        recommendation: "Regenerate layout with fire egress template if high occupancy".to_string(),
    });

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectRequest, Usage};

    fn project(preferred_codes: Vec<String>) -> Project {
        Project::new(ProjectRequest {
            title: "Test".to_string(),
            location: "Hyderabad".to_string(),
            usage: Usage::Residential,
            floors: 3,
            footprint_m2: 120.0,
            preferred_codes,
            structure_types: Vec::new(),
            soil_type: None,
            budget: None,
            regional_rate: None,
        })
    }

    #[test]
    fn test_one_check_per_preferred_code() {
        let checks = compliance_checks(&project(vec![
            "IS 456".to_string(),
            "IS 875".to_string(),
            "ACI 318".to_string(),
        ]));

        assert_eq!(checks.len(), 4);
        assert_eq!(checks[0].code, "IS 456");
        assert_eq!(checks[2].code, "ACI 318");
        assert!(checks[..3].iter().all(|c| c.status == "pass"));
    }

    #[test]
    fn test_empty_brief_falls_back_to_default_codes() {
        let checks = compliance_checks(&project(Vec::new()));

        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].code, "IS 456");
        assert_eq!(checks[1].code, "IS 875");
    }

    #[test]
    fn test_fire_advisory_is_always_last() {
        let checks = compliance_checks(&project(vec!["EC 2".to_string()]));
        let fire = checks.last().unwrap();

        assert_eq!(fire.code, "NBC Fire");
        assert_eq!(fire.clause, "Means of egress");
        assert_eq!(fire.status, "warning");
    }
}
