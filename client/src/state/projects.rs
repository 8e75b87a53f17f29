//! Tech-stack filtering for a project section.
//!
//! DESIGN
//! ======
//! Filters combine with AND semantics: a project is shown only when its
//! tech list contains every active filter. Active filters keep the order
//! in which they were toggled on so the summary reads naturally.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::BTreeSet;

use crate::content::Project;

/// Active tech filters of one project section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    active: Vec<&'static str>,
}

impl ProjectFilter {
    #[must_use]
    pub fn active(&self) -> &[&'static str] {
        &self.active
    }

    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub fn is_active(&self, tech: &str) -> bool {
        self.active.iter().any(|t| *t == tech)
    }

    /// Add `tech` if absent, otherwise remove it.
    pub fn toggle(&mut self, tech: &'static str) {
        if let Some(idx) = self.active.iter().position(|t| *t == tech) {
            self.active.remove(idx);
        } else {
            self.active.push(tech);
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        self.active.iter().all(|tech| project.tech.contains(tech))
    }

    /// Projects passing the filter, in source order.
    #[must_use]
    pub fn apply(&self, projects: &'static [Project]) -> Vec<&'static Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Status line shown above the grid while filtering.
    #[must_use]
    pub fn summary(&self, total: usize, shown: usize) -> String {
        let mut line = format!("Showing {shown} of {total} projects");
        if self.is_filtering() {
            line.push_str(" · Filtered by: ");
            line.push_str(&self.active.join(", "));
        }
        line
    }
}

/// Sorted, de-duplicated tech labels across `projects`.
#[must_use]
pub fn all_tech(projects: &'static [Project]) -> Vec<&'static str> {
    projects
        .iter()
        .flat_map(|p| p.tech.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
