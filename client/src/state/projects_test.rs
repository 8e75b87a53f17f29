use super::*;
use crate::content::{AI_ML_PROJECTS, PLATFORM_PROJECTS};

const SAMPLE: &[Project] = &[
    Project { title: "A", description: "", tags: &[], tech: &["Rust", "Axum"] },
    Project { title: "B", description: "", tags: &[], tech: &["Rust", "Leptos"] },
    Project { title: "C", description: "", tags: &[], tech: &["Python"] },
];

fn titles(projects: &[&Project]) -> Vec<&'static str> {
    projects.iter().map(|p| p.title).collect()
}

// =============================================================
// Toggle / clear
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut filter = ProjectFilter::default();
    filter.toggle("Rust");
    assert!(filter.is_active("Rust"));
    filter.toggle("Rust");
    assert!(!filter.is_active("Rust"));
    assert!(!filter.is_filtering());
}

#[test]
fn toggle_keeps_insertion_order() {
    let mut filter = ProjectFilter::default();
    filter.toggle("Leptos");
    filter.toggle("Axum");
    assert_eq!(filter.active(), &["Leptos", "Axum"]);
}

#[test]
fn clear_removes_everything() {
    let mut filter = ProjectFilter::default();
    filter.toggle("Rust");
    filter.toggle("Axum");
    filter.clear();
    assert_eq!(filter, ProjectFilter::default());
}

// =============================================================
// Matching
// =============================================================

#[test]
fn empty_filter_matches_all() {
    let filter = ProjectFilter::default();
    assert_eq!(filter.apply(SAMPLE).len(), SAMPLE.len());
}

#[test]
fn filters_combine_with_and() {
    let mut filter = ProjectFilter::default();
    filter.toggle("Rust");
    assert_eq!(titles(&filter.apply(SAMPLE)), vec!["A", "B"]);
    filter.toggle("Leptos");
    assert_eq!(titles(&filter.apply(SAMPLE)), vec!["B"]);
    filter.toggle("Python");
    assert!(filter.apply(SAMPLE).is_empty());
}

#[test]
fn fastapi_filter_on_ai_projects() {
    let mut filter = ProjectFilter::default();
    filter.toggle("FastAPI");
    let shown = filter.apply(AI_ML_PROJECTS);
    assert!(!shown.is_empty());
    assert!(shown.iter().all(|p| p.tech.contains(&"FastAPI")));
}

// =============================================================
// Summary / tech list
// =============================================================

#[test]
fn summary_without_filters() {
    let filter = ProjectFilter::default();
    assert_eq!(filter.summary(8, 8), "Showing 8 of 8 projects");
}

#[test]
fn summary_lists_active_filters() {
    let mut filter = ProjectFilter::default();
    filter.toggle("Java");
    filter.toggle("Angular");
    assert_eq!(
        filter.summary(8, 2),
        "Showing 2 of 8 projects · Filtered by: Java, Angular"
    );
}

#[test]
fn all_tech_is_sorted_and_unique() {
    assert_eq!(all_tech(SAMPLE), vec!["Axum", "Leptos", "Python", "Rust"]);
    let platform = all_tech(PLATFORM_PROJECTS);
    let mut sorted = platform.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(platform, sorted);
}
