// Theme collection with a single selected entry

use crate::error::StoreError;
use crate::model::{timestamp_id, Theme};
use tracing::{debug, info};

/// Result of [`ThemeStore::select`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Found(&'a Theme),
    /// The id was unknown; the first theme is selected instead
    Fallback(&'a Theme),
}

impl<'a> Selection<'a> {
    pub fn theme(self) -> &'a Theme {
        match self {
            Selection::Found(t) | Selection::Fallback(t) => t,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Selection::Found(_))
    }
}

/// Whether [`ThemeStore::save`] replaced or appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Owns the theme collection; never empty
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore {
    themes: Vec<Theme>,
    selected: usize,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::builtin())
    }
}

impl ThemeStore {
    // An empty collection is replaced by the default template
    pub fn new(themes: Vec<Theme>) -> Self {
        let themes = if themes.is_empty() {
            vec![Theme::default_template()]
        } else {
            themes
        };
        Self {
            themes,
            selected: 0,
        }
    }

    pub fn list(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn selected(&self) -> &Theme {
        &self.themes[self.selected]
    }

    pub fn select(&mut self, id: &str) -> Selection<'_> {
        match self.position(id) {
            Some(index) => {
                self.selected = index;
                Selection::Found(&self.themes[index])
            }
            None => {
                debug!(id, "Unknown theme id, selecting first theme");
                self.selected = 0;
                Selection::Fallback(&self.themes[0])
            }
        }
    }

    /// New draft cloned from the default template; not inserted until saved
    pub fn create(&self) -> Theme {
        Theme {
            id: self.fresh_id(),
            name: "New Theme".into(),
            description: "A new custom theme".into(),
            ..Theme::default_template()
        }
    }

    // Replaces the entry with the same id or appends; the saved theme becomes selected
    pub fn save(&mut self, draft: Theme) -> SaveOutcome {
        match self.position(&draft.id) {
            Some(index) => {
                info!(id = %draft.id, name = %draft.name, "Theme updated");
                self.themes[index] = draft;
                self.selected = index;
                SaveOutcome::Updated
            }
            None => {
                info!(id = %draft.id, name = %draft.name, "Theme created");
                self.themes.push(draft);
                self.selected = self.themes.len() - 1;
                SaveOutcome::Created
            }
        }
    }

    // Removes a theme; an emptied collection gets a fresh default theme
    pub fn remove(&mut self, id: &str) -> Result<Theme, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::ThemeNotFound(id.to_string()))?;
        let selected_id = self.selected().id.clone();
        let removed = self.themes.remove(index);
        info!(id = %removed.id, name = %removed.name, "Theme removed");

        if self.themes.is_empty() {
            let mut fallback = Theme::default_template();
            fallback.id = self.fresh_id();
            info!(id = %fallback.id, "Last theme removed, recreated default theme");
            self.themes.push(fallback);
            self.selected = 0;
        } else if selected_id == removed.id {
            self.selected = 0;
        } else {
            self.selected = self.position(&selected_id).unwrap_or(0);
        }
        Ok(removed)
    }

    /// Inserts an imported theme under a fresh id and selects it
    pub fn insert_imported(&mut self, mut theme: Theme) -> &Theme {
        let previous = std::mem::replace(&mut theme.id, self.fresh_id());
        info!(previous_id = %previous, id = %theme.id, name = %theme.name, "Theme imported");
        self.themes.push(theme);
        self.selected = self.themes.len() - 1;
        &self.themes[self.selected]
    }

    // Timestamp id, bumped until it does not collide
    pub fn fresh_id(&self) -> String {
        let mut id = timestamp_id();
        let mut bump = 1u32;
        while self.position(&id).is_some() {
            id = format!("{}-{}", timestamp_id(), bump);
            bump += 1;
        }
        id
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_builtin_themes_and_first_selected() {
        let store = ThemeStore::default();
        assert_eq!(store.len(), 3);
        assert_eq!(store.selected().name, "Default Theme");
    }

    #[test]
    fn empty_collection_gets_default_template() {
        let store = ThemeStore::new(Vec::new());
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected().name, "Default Theme");
    }

    #[test]
    fn select_reports_fallback_for_unknown_id() {
        let mut store = ThemeStore::default();
        assert!(store.select("3").is_found());
        assert_eq!(store.selected().id, "3");

        let selection = store.select("missing");
        assert!(!selection.is_found());
        assert_eq!(selection.theme().id, "1");
        assert_eq!(store.selected().id, "1");
    }

    #[test]
    fn create_does_not_insert() {
        let store = ThemeStore::default();
        let draft = store.create();
        assert_eq!(store.len(), 3);
        assert_eq!(draft.name, "New Theme");
        assert_eq!(draft.description, "A new custom theme");
        assert_eq!(draft.colors, Theme::default_template().colors);
        assert!(store.get(&draft.id).is_none());
    }

    #[test]
    fn save_appends_then_replaces() {
        let mut store = ThemeStore::default();
        let mut draft = store.create();
        assert_eq!(store.save(draft.clone()), SaveOutcome::Created);
        assert_eq!(store.len(), 4);
        assert_eq!(store.selected().id, draft.id);

        draft.name = "Renamed".into();
        assert_eq!(store.save(draft.clone()), SaveOutcome::Updated);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(&draft.id).map(|t| t.name.as_str()), Some("Renamed"));
    }

    #[test]
    fn removing_unselected_theme_keeps_selection() {
        let mut store = ThemeStore::default();
        store.select("3");
        store.remove("2").unwrap();
        assert_eq!(store.selected().id, "3");
    }

    #[test]
    fn removing_selected_theme_falls_back_to_first() {
        let mut store = ThemeStore::default();
        store.select("2");
        store.remove("2").unwrap();
        assert_eq!(store.selected().id, "1");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn removing_unknown_theme_is_an_error() {
        let mut store = ThemeStore::default();
        let err = store.remove("nope").unwrap_err();
        assert_eq!(err, StoreError::ThemeNotFound("nope".into()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn removing_last_theme_recreates_default() {
        let mut store = ThemeStore::new(vec![Theme::brand_template()]);
        store.remove("2").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected().name, "Default Theme");
        assert!(store.selected().id.starts_with("theme-"));
    }

    #[test]
    fn imported_theme_gets_fresh_unique_id() {
        let mut store = ThemeStore::default();
        let first = store.insert_imported(Theme::brand_template()).id.clone();
        let second = store.insert_imported(Theme::brand_template()).id.clone();
        assert_ne!(first, "2");
        assert_ne!(first, second);
        assert_eq!(store.selected().id, second);
        assert_eq!(store.len(), 5);
    }
}
