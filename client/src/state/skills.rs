//! Active tab of the skills section.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::content::{SKILL_TABS, SkillTab};

/// Which skill tab is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillsState {
    active: &'static str,
}

impl Default for SkillsState {
    fn default() -> Self {
        Self { active: SKILL_TABS.first().map_or("ai", |t| t.id) }
    }
}

impl SkillsState {
    #[must_use]
    pub fn active_id(&self) -> &'static str {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Switch tabs. Unknown ids are ignored; returns whether the tab changed.
    pub fn select(&mut self, id: &str) -> bool {
        match SKILL_TABS.iter().find(|t| t.id == id) {
            Some(tab) if tab.id != self.active => {
                self.active = tab.id;
                true
            }
            _ => false,
        }
    }

    /// Resolve the active tab, falling back to the first.
    #[must_use]
    pub fn active_tab(&self) -> Option<&'static SkillTab> {
        SKILL_TABS
            .iter()
            .find(|t| t.id == self.active)
            .or_else(|| SKILL_TABS.first())
    }
}

/// Inline width style for a skill bar at `level` percent.
#[must_use]
pub fn bar_width_style(level: u8) -> String {
    format!("width: {}%", level.min(100))
}
