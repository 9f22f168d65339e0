//! Cost estimation stage.
//!
//! SSR/SOR style costing: built-up area times a regional schedule rate,
//! plus fixed contingency and GST percentages, broken down into civil,
//! steel, and formwork lines.

use crate::models::{EstimateLine, EstimateSummary, Project};

use super::round2;

const CONTINGENCY_PCT: f64 = 5.0;
const GST_PCT: f64 = 18.0;

/// Rate per m2 of built-up area for a regional schedule key.
///
/// Unknown or missing keys fall back to the default schedule.
fn ssr_rate(key: Option<&str>) -> f64 {
    match key.unwrap_or("") {
        "telangana-2024" => 21_000.0,
        "andhra-2024" => 20_000.0,
        _ => 19_500.0,
    }
}

fn line(category: &str, description: &str, unit: &str, quantity: f64, rate: f64) -> EstimateLine {
    EstimateLine {
        category: category.to_string(),
        description: description.to_string(),
        unit: unit.to_string(),
        quantity,
        rate,
    }
}

/// Estimate project cost from the stored brief fields.
pub fn estimate_cost(project: &Project) -> EstimateSummary {
    let rate = ssr_rate(project.regional_rate.as_deref());
    let builtup = project.footprint_m2 * f64::from(project.floors);
    let base_cost = builtup * rate;
    let contingency = base_cost * CONTINGENCY_PCT / 100.0;
    let gst = (base_cost + contingency) * GST_PCT / 100.0;
    let total = base_cost + contingency + gst;

    let lines = vec![
        line(
            "civil",
            "Concrete + masonry + finishing",
            "m2",
            round2(builtup),
            rate,
        ),
        line(
            "steel",
            "Rebar/structural steel allowance",
            "kg",
            round2(builtup * 35.0),
            65.0,
        ),
        line(
            "formwork",
            "Shuttering and staging",
            "m2",
            round2(builtup),
            350.0,
        ),
    ];

    EstimateSummary {
        base_cost: round2(base_cost),
        contingency_pct: CONTINGENCY_PCT,
        gst_pct: GST_PCT,
        total: round2(total),
        lines,
    }
}
