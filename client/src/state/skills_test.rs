use super::*;

#[test]
fn default_tab_is_ai() {
    let state = SkillsState::default();
    assert_eq!(state.active_id(), "ai");
    assert_eq!(state.active_tab().map(|t| t.label), Some("AI & ML"));
}

#[test]
fn select_known_tab() {
    let mut state = SkillsState::default();
    assert!(state.select("cloud"));
    assert!(state.is_active("cloud"));
    assert!(!state.is_active("ai"));
    assert_eq!(state.active_tab().map(|t| t.id), Some("cloud"));
}

#[test]
fn select_same_tab_reports_no_change() {
    let mut state = SkillsState::default();
    assert!(!state.select("ai"));
}

#[test]
fn select_unknown_tab_is_ignored() {
    let mut state = SkillsState::default();
    state.select("data");
    assert!(!state.select("quantum"));
    assert_eq!(state.active_id(), "data");
}

#[test]
fn bar_width_clamps_to_hundred() {
    assert_eq!(bar_width_style(85), "width: 85%");
    assert_eq!(bar_width_style(140), "width: 100%");
}
