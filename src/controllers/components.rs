// Components panel: catalog search, category filter and code copy

use super::flash::{Flash, COPIED_TIMEOUT};
use crate::catalog::components::{self, ComponentEntry, ALL_CATEGORIES, COMPONENTS};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct ComponentsPanel {
    pub query: String,
    pub category: &'static str,
    copied: Flash<&'static str>,
}

impl Default for ComponentsPanel {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES,
            copied: Flash::new(COPIED_TIMEOUT),
        }
    }
}

impl ComponentsPanel {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_category(&mut self, category: &'static str) {
        self.category = category;
    }

    pub fn visible(&self) -> Vec<&'static ComponentEntry> {
        components::filter(COMPONENTS, &self.query, self.category)
    }

    /// Returns the snippet to place on the clipboard
    pub fn copy(&mut self, id: &str, now: Instant) -> Option<&'static str> {
        let entry = components::find(id)?;
        self.copied.trigger(entry.id, now);
        Some(entry.code)
    }

    pub fn is_copied(&self, id: &str) -> bool {
        components::find(id).is_some_and(|e| self.copied.is_active(&e.id))
    }

    pub fn is_pending(&self) -> bool {
        self.copied.is_pending()
    }

    pub fn tick(&mut self, now: Instant) {
        self.copied.expire(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn copy_marks_only_that_component() {
        let mut panel = ComponentsPanel::default();
        let now = Instant::now();
        let code = panel.copy("badge-1", now).unwrap();
        assert!(code.contains("<Badge>New</Badge>"));
        assert!(panel.is_copied("badge-1"));
        assert!(!panel.is_copied("button-1"));
        panel.tick(now + Duration::from_secs(2));
        assert!(!panel.is_copied("badge-1"));
    }

    #[test]
    fn unknown_component_copies_nothing() {
        let mut panel = ComponentsPanel::default();
        assert!(panel.copy("ghost", Instant::now()).is_none());
        assert!(!panel.is_pending());
    }

    #[test]
    fn filters_compose() {
        let mut panel = ComponentsPanel::default();
        panel.set_category("inputs");
        panel.set_query("form".into());
        let names: Vec<&str> = panel.visible().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Input"]);
    }
}
