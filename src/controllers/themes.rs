// Theme manager: selection, create/edit dialog, delete, export and import

use crate::error::{ImportError, StoreError};
use crate::model::{ColorRole, FontSizeStep, RadiusStep, Theme};
use crate::serialize::{export_css, export_file_name, export_json, import_json, ExportFormat};
use crate::store::{SaveOutcome, Selection, ThemeStore};
use crate::types::ManagerTab;
use anyhow::Result;
use tracing::{info, warn};

/// Create/edit dialog; the draft lives only while the dialog is open
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Creating(Theme),
    Editing(Theme),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating(_) => Some("Create New Theme"),
            DialogState::Editing(_) => Some("Edit Theme"),
        }
    }

    pub fn draft(&self) -> Option<&Theme> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating(t) | DialogState::Editing(t) => Some(t),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Theme> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating(t) | DialogState::Editing(t) => Some(t),
        }
    }
}

/// A rendered export ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeManagerPanel {
    pub tab: ManagerTab,
    pub dialog: DialogState,
    pub export_preview: String,
    pub preview_dark_mode: bool,
}

impl ThemeManagerPanel {
    pub fn set_tab(&mut self, tab: ManagerTab) {
        self.tab = tab;
    }

    // Returns false when the id was unknown and the first theme got selected
    pub fn select(&self, store: &mut ThemeStore, id: &str) -> bool {
        let selection = store.select(id);
        if let Selection::Fallback(theme) = selection {
            info!(requested = id, fallback = %theme.id, "Selected first theme instead");
        }
        selection.is_found()
    }

    // Closed -> Creating
    pub fn open_create(&mut self, store: &ThemeStore) {
        self.dialog = DialogState::Creating(store.create());
    }

    // Closed -> Editing, on a copy of the stored theme
    pub fn open_edit(&mut self, store: &ThemeStore, id: &str) -> Result<(), StoreError> {
        let theme = store
            .get(id)
            .ok_or_else(|| StoreError::ThemeNotFound(id.to_string()))?;
        self.dialog = DialogState::Editing(theme.clone());
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.dialog = DialogState::Closed;
    }

    // Commits the draft and closes; a blank name keeps the dialog open
    pub fn save(&mut self, store: &mut ThemeStore) -> Result<Option<SaveOutcome>, StoreError> {
        if self
            .dialog
            .draft()
            .is_some_and(|draft| draft.name.trim().is_empty())
        {
            return Err(StoreError::BlankName);
        }
        Ok(match std::mem::take(&mut self.dialog) {
            DialogState::Closed => None,
            DialogState::Creating(draft) | DialogState::Editing(draft) => Some(store.save(draft)),
        })
    }

    pub fn set_draft_name(&mut self, value: String) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.name = value;
        }
    }

    pub fn set_draft_description(&mut self, value: String) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.description = value;
        }
    }

    pub fn set_draft_color(&mut self, role: ColorRole, value: String) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.colors.set(role, value);
        }
    }

    pub fn set_draft_font_family(&mut self, value: String) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.typography.font_family = value;
        }
    }

    pub fn set_draft_font_size(&mut self, step: FontSizeStep, value: String) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.typography.font_size.set(step, value);
        }
    }

    pub fn set_draft_radius(&mut self, step: RadiusStep, value: String) {
        if let Some(draft) = self.dialog.draft_mut() {
            draft.border_radius.set(step, value);
        }
    }

    /// Deleting is only offered while another theme would remain
    pub fn can_delete(&self, store: &ThemeStore) -> bool {
        store.len() > 1
    }

    pub fn delete(&mut self, store: &mut ThemeStore, id: &str) -> Result<Theme, StoreError> {
        store.remove(id)
    }

    pub fn toggle_preview_dark_mode(&mut self) {
        self.preview_dark_mode = !self.preview_dark_mode;
    }

    // Renders the selected theme, shows it in the export tab and returns the file to write
    pub fn export(&mut self, store: &ThemeStore, format: ExportFormat) -> Result<ExportFile> {
        let theme = store.selected();
        let contents = match format {
            ExportFormat::Json => export_json(theme)?,
            ExportFormat::Css => export_css(theme),
        };
        self.export_preview = contents.clone();
        self.tab = ManagerTab::Export;
        Ok(ExportFile {
            file_name: export_file_name(theme, format),
            format,
            contents,
        })
    }

    // Parsed themes are inserted under a fresh id; failures leave the store untouched
    pub fn import<'a>(
        &self,
        store: &'a mut ThemeStore,
        text: &str,
    ) -> Result<&'a Theme, ImportError> {
        match import_json(text) {
            Ok(theme) => Ok(store.insert_imported(theme)),
            Err(e) => {
                warn!(error = %e, "Theme import rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_cancel_discards_draft() {
        let mut store = ThemeStore::default();
        let mut panel = ThemeManagerPanel::default();
        panel.open_create(&store);
        assert_eq!(panel.dialog.title(), Some("Create New Theme"));
        panel.set_draft_name("Draft".into());
        panel.cancel();
        assert_eq!(panel.dialog, DialogState::Closed);
        assert_eq!(panel.save(&mut store), Ok(None));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn blank_name_is_refused_and_dialog_stays_open() {
        let mut store = ThemeStore::default();
        let mut panel = ThemeManagerPanel::default();
        panel.open_create(&store);
        for name in ["", "   \t"] {
            panel.set_draft_name(name.into());
            assert_eq!(panel.save(&mut store), Err(StoreError::BlankName));
            assert!(panel.dialog.is_open());
            assert_eq!(store.len(), 3);
        }

        panel.set_draft_name("Named".into());
        assert_eq!(panel.save(&mut store), Ok(Some(SaveOutcome::Created)));
        let saved = store.selected().clone();
        let json = export_json(&saved).unwrap();
        let reimported = import_json(&json).unwrap();
        assert_eq!(reimported, saved);
    }

    #[test]
    fn create_then_save_appends_and_selects() {
        let mut store = ThemeStore::default();
        let mut panel = ThemeManagerPanel::default();
        panel.open_create(&store);
        panel.set_draft_name("Ocean".into());
        panel.set_draft_color(ColorRole::Accent, "#00ffff".into());
        assert_eq!(panel.save(&mut store), Ok(Some(SaveOutcome::Created)));
        assert!(!panel.dialog.is_open());
        assert_eq!(store.selected().name, "Ocean");
        assert_eq!(store.selected().colors.accent, "#00ffff");
    }

    #[test]
    fn edit_works_on_a_copy_until_saved() {
        let mut store = ThemeStore::default();
        let mut panel = ThemeManagerPanel::default();
        panel.open_edit(&store, "2").unwrap();
        assert_eq!(panel.dialog.title(), Some("Edit Theme"));
        panel.set_draft_font_size(FontSizeStep::Base, "18px".into());
        panel.set_draft_radius(RadiusStep::Full, "50%".into());
        assert_eq!(store.get("2").unwrap().typography.font_size.base, "1rem");

        assert_eq!(panel.save(&mut store), Ok(Some(SaveOutcome::Updated)));
        let saved = store.get("2").unwrap();
        assert_eq!(saved.typography.font_size.base, "18px");
        assert_eq!(saved.border_radius.full, "50%");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn edit_of_unknown_theme_keeps_dialog_closed() {
        let store = ThemeStore::default();
        let mut panel = ThemeManagerPanel::default();
        assert!(panel.open_edit(&store, "zzz").is_err());
        assert!(!panel.dialog.is_open());
    }

    #[test]
    fn draft_setters_ignore_closed_dialog() {
        let mut panel = ThemeManagerPanel::default();
        panel.set_draft_name("x".into());
        assert_eq!(panel.dialog, DialogState::Closed);
    }

    #[test]
    fn select_reports_unknown_ids() {
        let mut store = ThemeStore::default();
        let panel = ThemeManagerPanel::default();
        assert!(panel.select(&mut store, "2"));
        assert!(!panel.select(&mut store, "missing"));
        assert_eq!(store.selected().id, "1");
    }

    #[test]
    fn export_switches_to_export_tab() {
        let store = ThemeStore::default();
        let mut panel = ThemeManagerPanel::default();
        let file = panel.export(&store, ExportFormat::Css).unwrap();
        assert_eq!(file.file_name, "default-theme.css");
        assert_eq!(panel.tab, ManagerTab::Export);
        assert_eq!(panel.export_preview, file.contents);
    }

    #[test]
    fn delete_is_offered_only_with_multiple_themes() {
        let mut store = ThemeStore::new(vec![Theme::default_template(), Theme::dark_template()]);
        let mut panel = ThemeManagerPanel::default();
        assert!(panel.can_delete(&store));
        panel.delete(&mut store, "3").unwrap();
        assert!(!panel.can_delete(&store));
    }

    #[test]
    fn failed_import_leaves_store_unchanged() {
        let mut store = ThemeStore::default();
        let panel = ThemeManagerPanel::default();
        let before = store.list().to_vec();
        assert!(panel.import(&mut store, "{not json").is_err());
        assert_eq!(store.list(), before.as_slice());
    }
}
