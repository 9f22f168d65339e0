//! Structural skeleton stage.
//!
//! Sizes a column/beam grid from the footprint and classifies the site into
//! seismic and wind zones from keywords in the location string. Output is a
//! preliminary skeleton meant for downstream solver export, not a design.

use crate::models::{Project, StructuralSkeleton};

use super::ceil_count;

/// Keyword table mapping a location to a seismic region bucket.
fn regional_bucket(location: &str) -> &'static str {
    let loc = location.to_lowercase();
    if ["delhi", "himalaya", "northeast"]
        .iter()
        .any(|&key| loc.contains(key))
    {
        "north"
    } else if ["mumbai", "chennai", "coast", "vishakh"]
        .iter()
        .any(|&key| loc.contains(key))
    {
        "coastal"
    } else {
        "south"
    }
}

fn seismic_zone(location: &str) -> &'static str {
    match regional_bucket(location) {
        "north" => "Zone V",
        "central" => "Zone IV",
        _ => "Zone III",
    }
}

fn wind_zone(location: &str) -> &'static str {
    let loc = location.to_lowercase();
    let coastal = ["coast", "bay", "mumbai", "chennai", "vizag"]
        .iter()
        .any(|&key| loc.contains(key));
    if coastal {
        "WL-6"
    } else {
        "WL-3"
    }
}

/// Derive a preliminary structural skeleton for the project.
///
/// One column per 25 m2 of footprint with a floor of four; beams run twice
/// the column count, saturating at `u32::MAX` for out-of-scale footprints.
/// A raft foundation is used only when the soil type is exactly "soft".
pub fn derive_structure(project: &Project) -> StructuralSkeleton {
    let columns = ceil_count(project.footprint_m2 / 25.0).max(4);
    let beams = columns.saturating_mul(2);
    let slab_type = if project.footprint_m2 / f64::from(columns) < 30.0 {
        "two-way"
    } else {
        "flat-slab"
    };
    let foundation = if project.soil_type.as_deref() == Some("soft") {
        "raft"
    } else {
        "isolated footings"
    };

    StructuralSkeleton {
        columns,
        beams,
        slab_type: slab_type.to_string(),
        foundation: foundation.to_string(),
        seismic_zone: seismic_zone(&project.location).to_string(),
        wind_zone: wind_zone(&project.location).to_string(),
        notes: vec![
            "Preliminary sizing only; hook to Kratos for solver export".to_string(),
            "Code checks pending integration with IS/ACI/EC modules".to_string(),
        ],
    }
}
