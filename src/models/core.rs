//! Platform-surface models: module catalog, requirement briefs, health.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Describes a feature module exposed by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Unique module identifier
    pub key: String,
    /// Human-readable module name
    pub name: String,
    /// What the module provides
    pub summary: String,
    /// How the module is billed (per-use/subscription)
    pub billing_model: String,
    /// Delivery status: planned, m1..m6, mvp, beta, ga
    pub maturity: String,
}

impl ModuleDescriptor {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        summary: impl Into<String>,
        billing_model: impl Into<String>,
        maturity: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            summary: summary.into(),
            billing_model: billing_model.into(),
            maturity: maturity.into(),
        }
    }
}

/// High-level project requirement captured from the user.
///
/// Echoed back verbatim for now; persistence will be added once brief storage
/// is wired to the requirement engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementBrief {
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Design codes requested
    #[serde(default)]
    pub preferred_codes: Vec<String>,
    /// Structure types involved
    #[serde(default)]
    pub structure_types: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Health check response with the static module catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service health state
    pub status: String,
    /// Environment label
    pub environment: String,
    /// Application version
    pub version: String,
    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}
