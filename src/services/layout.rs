//! Layout proposal stage.
//!
//! Turns a requirement brief into a template-based architectural layout:
//! usage class selects the room schedule and efficiency factor, floor count
//! selects the staircase archetype, footprint sizes the parking provision.

use crate::models::{LayoutPlan, ProjectRequest, RoomSpec, Staircase, Usage};

use super::{ceil_count, round2};

/// Net-to-gross efficiency by usage class.
fn efficiency_for(usage: Usage) -> f64 {
    match usage {
        Usage::Residential => 0.78,
        Usage::Commercial | Usage::Industrial => 0.72,
    }
}

fn room(name: &str, area_m2: f64) -> RoomSpec {
    RoomSpec {
        name: name.to_string(),
        area_m2,
        notes: None,
    }
}

/// Template room schedule for the usage class.
fn room_schedule(usage: Usage) -> Vec<RoomSpec> {
    match usage {
        Usage::Residential => vec![
            RoomSpec {
                name: "Bedroom".to_string(),
                area_m2: 12.0,
                notes: Some("Template sizing".to_string()),
            },
            room("Kitchen", 8.0),
            room("Living", 18.0),
            room("Toilet", 4.5),
        ],
        Usage::Commercial => vec![
            room("Office", 16.0),
            room("Meeting Room", 20.0),
            room("Pantry", 6.0),
        ],
        Usage::Industrial => vec![
            room("Shop Floor", 50.0),
            room("Warehouse", 80.0),
            room("Utility", 15.0),
        ],
    }
}

/// Propose a layout for the brief.
///
/// Parking is one bay per 40 m2 of footprint with a floor of one, except
/// industrial projects which provision none.
pub fn propose_layout(request: &ProjectRequest) -> LayoutPlan {
    let gross = request.footprint_m2 * f64::from(request.floors);
    let efficiency = efficiency_for(request.usage);
    let circulation = gross * (1.0 - efficiency);
    let staircase = if request.floors <= 4 {
        Staircase::Doglegged
    } else {
        Staircase::OpenWell
    };
    let parking_stalls = match request.usage {
        Usage::Industrial => 0,
        _ => ceil_count(request.footprint_m2 / 40.0).max(1),
    };

    LayoutPlan {
        efficiency: round2(efficiency),
        gross_area_m2: round2(gross),
        circulation_m2: round2(circulation),
        rooms: room_schedule(request.usage),
        staircase,
        parking_stalls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(usage: Usage, floors: u32, footprint_m2: f64) -> ProjectRequest {
        ProjectRequest {
            title: "Test".to_string(),
            location: "Hyderabad".to_string(),
            usage,
            floors,
            footprint_m2,
            preferred_codes: Vec::new(),
            structure_types: Vec::new(),
            soil_type: None,
            budget: None,
            regional_rate: None,
        }
    }

    #[test]
    fn test_residential_layout() {
        let plan = propose_layout(&brief(Usage::Residential, 3, 120.0));

        assert_eq!(plan.efficiency, 0.78);
        assert_eq!(plan.gross_area_m2, 360.0);
        assert_eq!(plan.circulation_m2, 79.2);
        assert_eq!(plan.staircase, Staircase::Doglegged);
        assert_eq!(plan.parking_stalls, 3);

        let names: Vec<&str> = plan.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bedroom", "Kitchen", "Living", "Toilet"]);
        assert_eq!(plan.rooms[0].notes.as_deref(), Some("Template sizing"));
        assert!(plan.rooms[1].notes.is_none());
    }

    #[test]
    fn test_commercial_layout() {
        let plan = propose_layout(&brief(Usage::Commercial, 2, 200.0));

        assert_eq!(plan.efficiency, 0.72);
        assert_eq!(plan.parking_stalls, 5);
        let names: Vec<&str> = plan.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Office", "Meeting Room", "Pantry"]);
    }

    #[test]
    fn test_industrial_gets_no_parking() {
        let plan = propose_layout(&brief(Usage::Industrial, 1, 500.0));

        assert_eq!(plan.parking_stalls, 0);
        let names: Vec<&str> = plan.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Shop Floor", "Warehouse", "Utility"]);
    }

    #[test]
    fn test_tall_building_switches_staircase() {
        let low = propose_layout(&brief(Usage::Commercial, 4, 300.0));
        let tall = propose_layout(&brief(Usage::Commercial, 5, 300.0));

        assert_eq!(low.staircase, Staircase::Doglegged);
        assert_eq!(tall.staircase, Staircase::OpenWell);
    }

    #[test]
    fn test_parking_floor_of_one() {
        let plan = propose_layout(&brief(Usage::Residential, 1, 10.0));
        assert_eq!(plan.parking_stalls, 1);
    }

    #[test]
    fn test_parking_clamps_for_out_of_scale_footprints() {
        let plan = propose_layout(&brief(Usage::Residential, 1, 2.0e11));
        assert_eq!(plan.parking_stalls, u32::MAX);
    }
}
