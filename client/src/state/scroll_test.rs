use super::*;

#[test]
fn top_of_page_is_transparent() {
    let state = ScrollState::from_metrics(0.0, 3000.0, 800.0);
    assert!(!state.nav_solid);
    assert!(!state.show_back_to_top);
    assert_eq!(state.progress, 0.0);
}

#[test]
fn nav_turns_solid_strictly_past_threshold() {
    assert!(!ScrollState::from_metrics(50.0, 3000.0, 800.0).nav_solid);
    assert!(ScrollState::from_metrics(51.0, 3000.0, 800.0).nav_solid);
}

#[test]
fn back_to_top_strictly_past_threshold() {
    assert!(!ScrollState::from_metrics(400.0, 3000.0, 800.0).show_back_to_top);
    assert!(ScrollState::from_metrics(401.0, 3000.0, 800.0).show_back_to_top);
}

#[test]
fn progress_is_fraction_of_scrollable_distance() {
    let state = ScrollState::from_metrics(1100.0, 3000.0, 800.0);
    assert!((state.progress - 0.5).abs() < 1e-9);
}

#[test]
fn progress_clamps_on_overscroll() {
    assert_eq!(ScrollState::from_metrics(5000.0, 3000.0, 800.0).progress, 1.0);
    assert_eq!(ScrollState::from_metrics(-40.0, 3000.0, 800.0).progress, 0.0);
}

#[test]
fn short_page_has_zero_progress() {
    let state = ScrollState::from_metrics(0.0, 600.0, 800.0);
    assert_eq!(state.progress, 0.0);
}

#[test]
fn non_finite_offset_is_treated_as_top() {
    let state = ScrollState::from_metrics(f64::NAN, 3000.0, 800.0);
    assert_eq!(state, ScrollState::default());
}

#[test]
fn progress_transform_formats_scale() {
    let state = ScrollState::from_metrics(1100.0, 3000.0, 800.0);
    assert_eq!(state.progress_transform(), "scaleX(0.5000)");
}
