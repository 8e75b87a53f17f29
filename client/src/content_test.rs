use std::collections::HashSet;

use super::*;

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_links_target_rendered_sections() {
    for link in NAV_LINKS {
        let id = link.href.strip_prefix('#').expect("nav href should be a fragment");
        assert!(SECTION_IDS.contains(&id), "{} has no section", link.href);
    }
}

#[test]
fn nav_has_six_links() {
    assert_eq!(NAV_LINKS.len(), 6);
}

#[test]
fn section_ids_are_unique() {
    let ids: HashSet<_> = SECTION_IDS.iter().collect();
    assert_eq!(ids.len(), SECTION_IDS.len());
}

// =============================================================
// Hero
// =============================================================

#[test]
fn hero_stats_match_project_counts() {
    assert_eq!(STATS.len(), 3);
    assert_eq!(STATS[1].target as usize, AI_ML_PROJECTS.len());
    assert_eq!(STATS[2].target as usize, PLATFORM_PROJECTS.len());
    assert!(STATS[0].target as usize >= AI_ML_PROJECTS.len() + PLATFORM_PROJECTS.len());
}

#[test]
fn tagline_and_roles_are_not_empty() {
    assert!(!TAGLINE.is_empty());
    assert_eq!(ROLES.len(), 4);
}

// =============================================================
// Skills
// =============================================================

#[test]
fn skill_levels_are_percentages() {
    for tab in SKILL_TABS {
        for skill in tab.skills {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }
}

#[test]
fn skill_tab_ids_are_unique() {
    let ids: HashSet<_> = SKILL_TABS.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), SKILL_TABS.len());
    assert_eq!(SKILL_TABS[0].id, "ai");
}

#[test]
fn every_skill_tab_has_badges_and_skills() {
    for tab in SKILL_TABS {
        assert!(!tab.badges.is_empty(), "{} has no badges", tab.id);
        assert!(!tab.skills.is_empty(), "{} has no skills", tab.id);
    }
}

// =============================================================
// Projects
// =============================================================

#[test]
fn project_titles_unique_within_group() {
    for group in PROJECT_GROUPS {
        let titles: HashSet<_> = group.projects.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), group.projects.len(), "duplicate in {}", group.id);
    }
}

#[test]
fn project_groups_are_nav_targets() {
    for group in PROJECT_GROUPS {
        assert!(SECTION_IDS.contains(&group.id));
        assert!(NAV_LINKS.iter().any(|l| l.href.trim_start_matches('#') == group.id));
    }
}

#[test]
fn project_group_sizes() {
    assert_eq!(AI_ML_PROJECTS.len(), 12);
    assert_eq!(PLATFORM_PROJECTS.len(), 8);
    assert_eq!(PROJECT_GROUPS[0].accent, Accent::Orange);
    assert_eq!(PROJECT_GROUPS[1].accent, Accent::Ember);
}

#[test]
fn projects_have_tech() {
    for project in AI_ML_PROJECTS.iter().chain(PLATFORM_PROJECTS) {
        assert!(!project.tech.is_empty(), "{}", project.title);
    }
}

#[test]
fn accent_modifier_names() {
    assert_eq!(Accent::Orange.modifier(), "orange");
    assert_eq!(Accent::Ember.modifier(), "ember");
}

// =============================================================
// Contact / profile
// =============================================================

#[test]
fn only_mail_link_stays_in_tab() {
    for link in CONTACT_LINKS {
        assert_eq!(link.external, !link.href.starts_with("mailto:"), "{}", link.label);
    }
}

#[test]
fn resume_is_served_from_site_root() {
    assert!(PROFILE.resume_href.starts_with('/'));
    assert!(PROFILE.resume_href.ends_with(".pdf"));
}
