//! Integration tests for the pipeline services against the project store.

use civilforge::api::ProjectId;
use civilforge::models::{ProjectRequest, Usage};
use civilforge::services::{compliance_checks, estimate_cost, seed_project};
use civilforge::store::{ProjectStore, StoreError};

fn brief(title: &str, regional_rate: Option<&str>) -> ProjectRequest {
    ProjectRequest {
        title: title.to_string(),
        location: "Hyderabad".to_string(),
        usage: Usage::Residential,
        floors: 3,
        footprint_m2: 120.0,
        preferred_codes: vec!["IS 456".to_string(), "IS 875".to_string()],
        structure_types: vec!["RCC".to_string()],
        soil_type: Some("stiff clay".to_string()),
        budget: None,
        regional_rate: regional_rate.map(str::to_string),
    }
}

#[test]
fn test_seed_store_fetch_roundtrip() {
    let store = ProjectStore::new();
    let project = seed_project(brief("Lakeview villa", Some("telangana-2024")));
    let id = project.id.clone();
    store.insert(project);

    let fetched = store.fetch(&id).unwrap();
    assert_eq!(fetched.title, "Lakeview villa");
    assert_eq!(fetched.estimate.unwrap().total, 9_366_840.0);
}

#[test]
fn test_fetch_unknown_project() {
    let store = ProjectStore::new();
    let id = ProjectId::new("non-existent");

    assert_eq!(store.fetch(&id), Err(StoreError::NotFound(id)));
}

#[test]
fn test_rerun_estimate_after_brief_edit() {
    let store = ProjectStore::new();
    let project = seed_project(brief("Rate study", Some("telangana-2024")));
    let id = project.id.clone();
    let original_total = project.estimate.as_ref().unwrap().total;
    store.insert(project);

    // Dropping the regional key falls back to the default schedule
    let new_total = store
        .update_with(&id, |project| {
            project.regional_rate = None;
            let estimate = estimate_cost(project);
            let total = estimate.total;
            project.estimate = Some(estimate);
            total
        })
        .unwrap();

    assert!(new_total < original_total);
    assert_eq!(store.fetch(&id).unwrap().estimate.unwrap().total, new_total);
}

#[test]
fn test_regional_rate_changes_totals() {
    let telangana = seed_project(brief("A", Some("telangana-2024")));
    let andhra = seed_project(brief("B", Some("andhra-2024")));
    let fallback = seed_project(brief("C", None));

    let total = |p: &civilforge::models::Project| p.estimate.as_ref().unwrap().total;
    assert!(total(&telangana) > total(&andhra));
    assert!(total(&andhra) > total(&fallback));
}

#[test]
fn test_compliance_defaults_when_brief_names_no_codes() {
    let mut request = brief("No codes", None);
    request.preferred_codes = Vec::new();
    let project = seed_project(request);

    let checks = compliance_checks(&project);
    let codes: Vec<&str> = checks.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["IS 456", "IS 875", "NBC Fire"]);
}

#[test]
fn test_concurrent_inserts() {
    let store = ProjectStore::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                let project = seed_project(brief(&format!("Project {}", i), None));
                store.insert(project);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 8);
    assert_eq!(store.list().len(), 8);
}
