//! Project aggregate and its derived sub-results.
//!
//! A [`ProjectRequest`] seeds a [`Project`], which accumulates the outputs of
//! the derivation pipeline (layout, skeleton, estimate, execution plan, and
//! the auxiliary artifact lists). Records are mutated in place as steps rerun
//! and are never deleted.

use serde::{Deserialize, Serialize};

use crate::api::ProjectId;

/// Building usage class. Drives the layout template and efficiency factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Residential,
    Commercial,
    Industrial,
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Usage::Residential => "residential",
            Usage::Commercial => "commercial",
            Usage::Industrial => "industrial",
        };
        write!(f, "{}", label)
    }
}

/// Staircase archetype chosen by the layout heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Staircase {
    Doglegged,
    OpenWell,
}

/// Represents a single room or space in an architectural layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub area_m2: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Layout proposal derived from the requirement brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Net to gross efficiency ratio
    pub efficiency: f64,
    /// Total built-up area considered
    pub gross_area_m2: f64,
    /// Area reserved for circulation/services
    pub circulation_m2: f64,
    #[serde(default)]
    pub rooms: Vec<RoomSpec>,
    /// Chosen staircase archetype
    pub staircase: Staircase,
    /// Number of parking bays provisioned
    pub parking_stalls: u32,
}

/// Simplified structural understanding as a precursor to solver export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralSkeleton {
    pub columns: u32,
    pub beams: u32,
    pub slab_type: String,
    pub foundation: String,
    pub seismic_zone: String,
    pub wind_zone: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Single BOQ/estimation line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateLine {
    pub category: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub rate: f64,
}

impl EstimateLine {
    /// Line total; derived, not serialized.
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

/// SSR/SOR based estimation summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub base_cost: f64,
    pub contingency_pct: f64,
    pub gst_pct: f64,
    pub total: f64,
    pub lines: Vec<EstimateLine>,
}

/// High-level project execution step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTask {
    pub name: String,
    pub duration_days: u32,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A generated drawing sheet with a mock download link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingSheet {
    pub name: String,
    pub discipline: String,
    pub format: String,
    pub download_url: String,
    pub notes: String,
}

/// Outcome of a single design-code check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub code: String,
    pub clause: String,
    /// pass/warning/fail
    pub status: String,
    pub message: String,
    pub recommendation: String,
}

/// BIM/solver export artifact with a mock download link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub format: String,
    pub schema: String,
    pub download_url: String,
    pub notes: String,
}

/// Entry in the project risk register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub name: String,
    pub severity: String,
    pub impact: String,
    pub mitigation: String,
}

/// Validation failure for an incoming project request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestValidationError {
    #[error("floors must be at least 1")]
    FloorsOutOfRange,

    #[error("footprint_m2 must be greater than zero")]
    FootprintNotPositive,
}

/// Incoming requirement payload used to seed the unified data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    pub location: String,
    /// residential/commercial/industrial
    pub usage: Usage,
    /// Number of storeys
    pub floors: u32,
    pub footprint_m2: f64,
    #[serde(default)]
    pub preferred_codes: Vec<String>,
    #[serde(default)]
    pub structure_types: Vec<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    /// Regional SSR/SOR key (e.g., telangana-2024)
    #[serde(default)]
    pub regional_rate: Option<String>,
}

impl ProjectRequest {
    /// Check the intake invariants: floors >= 1, footprint > 0.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.floors < 1 {
            return Err(RequestValidationError::FloorsOutOfRange);
        }
        if self.footprint_m2 <= 0.0 {
            return Err(RequestValidationError::FootprintNotPositive);
        }
        Ok(())
    }
}

/// Aggregate view of the project across requirement, layout, structure, and costing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub location: String,
    pub usage: Usage,
    pub floors: u32,
    pub footprint_m2: f64,
    #[serde(default)]
    pub preferred_codes: Vec<String>,
    #[serde(default)]
    pub structure_types: Vec<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub regional_rate: Option<String>,
    #[serde(default)]
    pub layout: Option<LayoutPlan>,
    #[serde(default)]
    pub skeleton: Option<StructuralSkeleton>,
    #[serde(default)]
    pub estimate: Option<EstimateSummary>,
    #[serde(default)]
    pub execution_plan: Vec<ExecutionTask>,
    #[serde(default)]
    pub drawings: Vec<DrawingSheet>,
    #[serde(default)]
    pub compliance: Vec<ComplianceCheck>,
    #[serde(default)]
    pub exports: Vec<ExportArtifact>,
    #[serde(default)]
    pub risks: Vec<RiskItem>,
}

impl Project {
    /// Create an empty project record from a request.
    ///
    /// Assigns a fresh id and applies the code/structure-type dedup
    /// invariant; all derived fields start unset.
    pub fn new(request: ProjectRequest) -> Self {
        Self {
            id: ProjectId::generate(),
            title: request.title,
            location: request.location,
            usage: request.usage,
            floors: request.floors,
            footprint_m2: request.footprint_m2,
            preferred_codes: dedupe_case_insensitive(&request.preferred_codes),
            structure_types: dedupe_case_insensitive(&request.structure_types),
            soil_type: request.soil_type,
            budget: request.budget,
            regional_rate: request.regional_rate,
            layout: None,
            skeleton: None,
            estimate: None,
            execution_plan: Vec::new(),
            drawings: Vec::new(),
            compliance: Vec::new(),
            exports: Vec::new(),
            risks: Vec::new(),
        }
    }

    /// Reassemble the original brief fields, e.g. to rerun the layout step.
    pub fn request(&self) -> ProjectRequest {
        ProjectRequest {
            title: self.title.clone(),
            location: self.location.clone(),
            usage: self.usage,
            floors: self.floors,
            footprint_m2: self.footprint_m2,
            preferred_codes: self.preferred_codes.clone(),
            structure_types: self.structure_types.clone(),
            soil_type: self.soil_type.clone(),
            budget: self.budget,
            regional_rate: self.regional_rate.clone(),
        }
    }
}

/// Deduplicate by case-insensitive key.
///
/// First-occurrence order is preserved; when the same key repeats, the casing
/// of the last occurrence wins.
pub fn dedupe_case_insensitive(values: &[String]) -> Vec<String> {
    let mut kept: Vec<(String, String)> = Vec::new();
    for value in values {
        let key = value.to_lowercase();
        match kept.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value.clone(),
            None => kept.push((key, value.clone())),
        }
    }
    kept.into_iter().map(|(_, v)| v).collect()
}
