// Application state and iced GUI implementation

mod view;

use crate::catalog::commands::ThemeOption;
use crate::controllers::{
    CliGuidePanel, ComponentsPanel, ConfigurationPanel, NumericField, ThemeManagerPanel,
    TokensPanel,
};
use crate::file_ops::{pick_import_path, pick_save_path, read_theme_file, write_export};
use crate::model::{ColorRole, FontSizeStep, RadiusStep, SpacingUnit};
use crate::serialize::{ExportFormat, CONFIG_EXPORT_FILE_NAME};
use crate::settings::{load_settings, save_settings, Settings};
use crate::store::{SaveOutcome, ThemeStore, TokenStore};
use crate::theme::{MAX_NAME_LENGTH, MAX_VALUE_LENGTH};
use crate::types::{CliTab, ConfigTab, ManagerTab, Panel, TokenSubmenu};
use iced::{clipboard, keyboard, time, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

const TICK_MS: u64 = 100;

/// A labelled value offered by a pick list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

pub struct Studio {
    panel: Panel,
    themes: ThemeStore,
    tokens: TokenStore,
    configuration: ConfigurationPanel,
    tokens_panel: TokensPanel,
    components: ComponentsPanel,
    manager: ThemeManagerPanel,
    cli: CliGuidePanel,
    status_message: Option<String>,
    is_error: bool,
    dark_mode: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PanelSelected(Panel),
    ToggleTheme,
    SettingsSaved,
    Tick,
    KeyboardEvent(keyboard::Key, keyboard::Modifiers),

    // Configuration
    ConfigTabSelected(ConfigTab),
    PaletteColorChanged(usize, String),
    FontFamilySelected(Choice),
    FontSizeSelected(Choice),
    FontWeightSelected(Choice),
    SpacingUnitSelected(SpacingUnit),
    NumericChanged(NumericField, f32),
    ShadowColorChanged(String),
    ConfigDarkModeToggled(bool),
    SaveConfiguration,
    ExportConfiguration,

    // Tokens
    TokenSubmenuSelected(TokenSubmenu),
    TokenColorChanged(String, String, String),

    // Components
    ComponentQueryChanged(String),
    ComponentCategorySelected(Choice),
    CopyComponentCode(&'static str),

    // Theme manager
    ManagerTabSelected(ManagerTab),
    ThemeSelected(String),
    CreateTheme,
    EditTheme(String),
    DeleteTheme(String),
    DraftNameChanged(String),
    DraftDescriptionChanged(String),
    DraftColorChanged(ColorRole, String),
    DraftFontFamilyChanged(String),
    DraftFontSizeChanged(FontSizeStep, String),
    DraftRadiusChanged(RadiusStep, String),
    SaveDraft,
    CancelDraft,
    TogglePreviewDarkMode,
    ExportTheme(ExportFormat),
    ExportCompleted(Result<Option<PathBuf>, String>),
    ImportTheme,
    ImportFileSelected(Option<PathBuf>),
    ImportLoaded(Result<String, String>),
    CopyExportPreview,

    // CLI guide
    CliTabSelected(CliTab),
    ProjectNameChanged(String),
    CliThemeSelected(ThemeOption),
    CopyCommand(String),
}

// Caps free-form input at a character count
fn limit(value: String, max: usize) -> String {
    if value.chars().count() > max {
        value.chars().take(max).collect()
    } else {
        value
    }
}

impl Studio {
    // Creates new app instance, loads saved settings
    pub fn new() -> (Self, Task<Message>) {
        let settings = load_settings();
        (Self::with_settings(settings), Task::none())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut manager = ThemeManagerPanel::default();
        manager.preview_dark_mode = settings.preview_dark_mode;
        Self {
            panel: settings.last_panel,
            themes: ThemeStore::default(),
            tokens: TokenStore::default(),
            configuration: ConfigurationPanel::default(),
            tokens_panel: TokensPanel::default(),
            components: ComponentsPanel::default(),
            manager,
            cli: CliGuidePanel::new(settings.cli_project_name),
            status_message: Some("Pick a panel to start editing".to_string()),
            is_error: false,
            dark_mode: settings.dark_mode,
        }
    }

    // Creates Settings struct from current state
    fn to_settings(&self) -> Settings {
        Settings {
            dark_mode: self.dark_mode,
            preview_dark_mode: self.manager.preview_dark_mode,
            last_panel: self.panel,
            cli_project_name: self.cli.project_name.clone(),
        }
    }

    // Saves settings asynchronously
    fn save_settings_async(&self) -> Task<Message> {
        let settings = self.to_settings();
        Task::perform(
            async move {
                save_settings(&settings);
            },
            |()| Message::SettingsSaved,
        )
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "Reported to user");
        self.status_message = Some(message);
        self.is_error = true;
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn has_pending_flags(&self) -> bool {
        self.configuration.is_pending() || self.components.is_pending() || self.cli.is_pending()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = iced::event::listen_with(|event, _status, _id| {
            if let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
            {
                Some(Message::KeyboardEvent(key, modifiers))
            } else {
                None
            }
        });

        let tick_sub = if self.has_pending_flags() {
            time::every(Duration::from_millis(TICK_MS)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, tick_sub])
    }

    // Handles all application messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyboardEvent(key, modifiers) => {
                match key {
                    keyboard::Key::Named(keyboard::key::Named::Escape)
                        if self.manager.dialog.is_open() =>
                    {
                        return self.update(Message::CancelDraft);
                    }
                    keyboard::Key::Character(c) if modifiers.control() && c.as_str() == "n" => {
                        self.panel = Panel::Themes;
                        return self.update(Message::CreateTheme);
                    }
                    keyboard::Key::Character(c) if modifiers.control() && c.as_str() == "o" => {
                        return self.update(Message::ImportTheme);
                    }
                    keyboard::Key::Character(c) if modifiers.control() && c.as_str() == "e" => {
                        return self.update(Message::ExportTheme(ExportFormat::Json));
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Tick => {
                let now = Instant::now();
                self.configuration.tick(now);
                self.components.tick(now);
                self.cli.tick(now);
                Task::none()
            }
            Message::SettingsSaved => Task::none(),
            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                self.save_settings_async()
            }
            Message::PanelSelected(panel) => {
                if panel != Panel::Tokens {
                    self.tokens_panel.leave();
                }
                self.panel = panel;
                self.save_settings_async()
            }

            Message::ConfigTabSelected(tab) => {
                self.configuration.set_tab(tab);
                Task::none()
            }
            Message::PaletteColorChanged(index, value) => {
                let value = limit(value, MAX_VALUE_LENGTH);
                if let Err(e) = self.configuration.set_color(&mut self.tokens, index, value) {
                    self.set_error(e.to_string());
                }
                Task::none()
            }
            Message::FontFamilySelected(choice) => {
                self.configuration.set_font_family(choice.value);
                Task::none()
            }
            Message::FontSizeSelected(choice) => {
                self.configuration.set_font_size(choice.value);
                Task::none()
            }
            Message::FontWeightSelected(choice) => {
                self.configuration.set_font_weight(choice.value);
                Task::none()
            }
            Message::SpacingUnitSelected(unit) => {
                self.configuration.set_spacing_unit(unit);
                Task::none()
            }
            Message::NumericChanged(field, value) => {
                self.configuration.set_numeric(field, value);
                Task::none()
            }
            Message::ShadowColorChanged(value) => {
                self.configuration
                    .set_shadow_color(limit(value, MAX_VALUE_LENGTH));
                Task::none()
            }
            Message::ConfigDarkModeToggled(enabled) => {
                self.configuration.set_dark_mode(enabled);
                Task::none()
            }
            Message::SaveConfiguration => {
                self.configuration.save(Instant::now());
                self.set_status("Configuration saved successfully!");
                Task::none()
            }
            Message::ExportConfiguration => match self.configuration.export(&self.tokens) {
                Ok(contents) => Self::export_task(
                    CONFIG_EXPORT_FILE_NAME.to_string(),
                    ExportFormat::Json,
                    contents,
                ),
                Err(e) => {
                    self.set_error(format!("Error: {}", e));
                    Task::none()
                }
            },

            Message::TokenSubmenuSelected(submenu) => {
                self.panel = Panel::Tokens;
                self.tokens_panel.set_submenu(submenu);
                Task::none()
            }
            Message::TokenColorChanged(category, name, value) => {
                let value = limit(value, MAX_VALUE_LENGTH);
                if let Err(e) =
                    self.tokens_panel
                        .update_color(&mut self.tokens, &category, &name, value)
                {
                    self.set_error(e.to_string());
                }
                Task::none()
            }

            Message::ComponentQueryChanged(query) => {
                self.components.set_query(limit(query, MAX_NAME_LENGTH));
                Task::none()
            }
            Message::ComponentCategorySelected(choice) => {
                self.components.set_category(choice.value);
                Task::none()
            }
            Message::CopyComponentCode(id) => match self.components.copy(id, Instant::now()) {
                Some(code) => clipboard::write(code.to_string()),
                None => Task::none(),
            },

            Message::ManagerTabSelected(tab) => {
                self.manager.set_tab(tab);
                Task::none()
            }
            Message::ThemeSelected(id) => {
                if !self.manager.select(&mut self.themes, &id) {
                    self.set_error(format!("Theme not found: {}", id));
                }
                Task::none()
            }
            Message::CreateTheme => {
                self.manager.open_create(&self.themes);
                Task::none()
            }
            Message::EditTheme(id) => {
                if let Err(e) = self.manager.open_edit(&self.themes, &id) {
                    self.set_error(e.to_string());
                }
                Task::none()
            }
            Message::DeleteTheme(id) => {
                if !self.manager.can_delete(&self.themes) {
                    self.set_error("At least one theme must remain");
                    return Task::none();
                }
                match self.manager.delete(&mut self.themes, &id) {
                    Ok(removed) => self.set_status(format!("Deleted '{}'", removed.name)),
                    Err(e) => self.set_error(e.to_string()),
                }
                Task::none()
            }
            Message::DraftNameChanged(value) => {
                self.manager.set_draft_name(limit(value, MAX_NAME_LENGTH));
                Task::none()
            }
            Message::DraftDescriptionChanged(value) => {
                self.manager
                    .set_draft_description(limit(value, MAX_VALUE_LENGTH));
                Task::none()
            }
            Message::DraftColorChanged(role, value) => {
                self.manager
                    .set_draft_color(role, limit(value, MAX_VALUE_LENGTH));
                Task::none()
            }
            Message::DraftFontFamilyChanged(value) => {
                self.manager
                    .set_draft_font_family(limit(value, MAX_VALUE_LENGTH));
                Task::none()
            }
            Message::DraftFontSizeChanged(step, value) => {
                self.manager
                    .set_draft_font_size(step, limit(value, MAX_VALUE_LENGTH));
                Task::none()
            }
            Message::DraftRadiusChanged(step, value) => {
                self.manager
                    .set_draft_radius(step, limit(value, MAX_VALUE_LENGTH));
                Task::none()
            }
            Message::SaveDraft => {
                match self.manager.save(&mut self.themes) {
                    Ok(Some(SaveOutcome::Created)) => self.set_status(format!(
                        "Created '{}'",
                        self.themes.selected().name
                    )),
                    Ok(Some(SaveOutcome::Updated)) => self.set_status(format!(
                        "Saved '{}'",
                        self.themes.selected().name
                    )),
                    Ok(None) => {}
                    Err(e) => self.set_error(e.to_string()),
                }
                Task::none()
            }
            Message::CancelDraft => {
                self.manager.cancel();
                Task::none()
            }
            Message::TogglePreviewDarkMode => {
                self.manager.toggle_preview_dark_mode();
                self.save_settings_async()
            }
            Message::ExportTheme(format) => match self.manager.export(&self.themes, format) {
                Ok(file) => {
                    self.panel = Panel::Themes;
                    Self::export_task(file.file_name, file.format, file.contents)
                }
                Err(e) => {
                    self.set_error(format!("Error: {}", e));
                    Task::none()
                }
            },
            Message::ExportCompleted(result) => {
                match result {
                    Ok(Some(path)) => self.set_status(format!("Exported to {}", path.display())),
                    Ok(None) => self.set_status("Export cancelled"),
                    Err(e) => {
                        error!(error = %e, "Export failed");
                        self.set_error(format!("Error: {}", e));
                    }
                }
                Task::none()
            }
            Message::ImportTheme => Task::perform(pick_import_path(), Message::ImportFileSelected),
            Message::ImportFileSelected(path) => {
                if let Some(path) = path {
                    self.set_status("Importing...");
                    Task::perform(
                        async move { read_theme_file(&path).await.map_err(|e| e.to_string()) },
                        Message::ImportLoaded,
                    )
                } else {
                    Task::none()
                }
            }
            Message::ImportLoaded(result) => {
                match result {
                    Ok(text) => match self.manager.import(&mut self.themes, &text) {
                        Ok(theme) => {
                            let status = format!("Imported '{}'", theme.name);
                            info!(id = %theme.id, "Theme import applied");
                            self.panel = Panel::Themes;
                            self.set_status(status);
                        }
                        Err(e) => self.set_error(format!("Import failed: {}", e)),
                    },
                    Err(e) => self.set_error(format!("Import failed: {}", e)),
                }
                Task::none()
            }
            Message::CopyExportPreview => {
                if self.manager.export_preview.is_empty() {
                    Task::none()
                } else {
                    self.set_status("Copied to clipboard");
                    clipboard::write(self.manager.export_preview.clone())
                }
            }

            Message::CliTabSelected(tab) => {
                self.cli.set_tab(tab);
                Task::none()
            }
            Message::ProjectNameChanged(name) => {
                self.cli.set_project_name(limit(name, MAX_NAME_LENGTH));
                self.save_settings_async()
            }
            Message::CliThemeSelected(theme) => {
                self.cli.set_theme(theme);
                Task::none()
            }
            Message::CopyCommand(command) => {
                let text = self.cli.copy(command, Instant::now());
                clipboard::write(text)
            }
        }
    }

    // Asks for a destination then writes; a dismissed dialog reports Ok(None)
    fn export_task(file_name: String, format: ExportFormat, contents: String) -> Task<Message> {
        Task::perform(
            async move {
                match pick_save_path(&file_name, format).await {
                    Some(path) => write_export(&path, &contents)
                        .await
                        .map(Some)
                        .map_err(|e| e.to_string()),
                    None => Ok(None),
                }
            },
            Message::ExportCompleted,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio() -> Studio {
        Studio::with_settings(Settings::default())
    }

    #[test]
    fn leaving_tokens_resets_submenu() {
        let mut app = studio();
        let _ = app.update(Message::TokenSubmenuSelected(TokenSubmenu::Space));
        assert_eq!(app.panel, Panel::Tokens);
        let _ = app.update(Message::PanelSelected(Panel::Components));
        assert_eq!(app.tokens_panel.submenu, TokenSubmenu::Border);
    }

    #[test]
    fn malformed_import_surfaces_error_and_keeps_themes() {
        let mut app = studio();
        let before = app.themes.list().to_vec();
        let _ = app.update(Message::ImportLoaded(Ok("{not json".into())));
        assert!(app.is_error);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Import failed")));
        assert_eq!(app.themes.list(), before.as_slice());
    }

    #[test]
    fn successful_import_selects_new_theme() {
        let mut app = studio();
        let json = crate::serialize::export_json(&crate::model::Theme::brand_template()).unwrap();
        let _ = app.update(Message::ImportLoaded(Ok(json)));
        assert!(!app.is_error);
        assert_eq!(app.themes.len(), 4);
        assert_eq!(app.themes.selected().name, "Brand Theme");
        assert_ne!(app.themes.selected().id, "2");
    }

    #[test]
    fn delete_refuses_last_theme() {
        let mut app = studio();
        let _ = app.update(Message::DeleteTheme("2".into()));
        let _ = app.update(Message::DeleteTheme("3".into()));
        assert_eq!(app.themes.len(), 1);
        let _ = app.update(Message::DeleteTheme("1".into()));
        assert_eq!(app.themes.len(), 1);
        assert!(app.is_error);
    }

    #[test]
    fn dialog_flow_creates_theme() {
        let mut app = studio();
        let _ = app.update(Message::CreateTheme);
        let _ = app.update(Message::DraftNameChanged("Sunset".into()));
        let _ = app.update(Message::DraftColorChanged(ColorRole::Primary, "#ff7700".into()));
        let _ = app.update(Message::SaveDraft);
        assert!(!app.manager.dialog.is_open());
        assert_eq!(app.themes.selected().name, "Sunset");
        assert_eq!(app.themes.selected().colors.primary, "#ff7700");
    }

    #[test]
    fn blank_draft_name_keeps_dialog_open_with_error() {
        let mut app = studio();
        let _ = app.update(Message::CreateTheme);
        let _ = app.update(Message::DraftNameChanged("  ".into()));
        let _ = app.update(Message::SaveDraft);
        assert!(app.manager.dialog.is_open());
        assert!(app.is_error);
        assert_eq!(app.themes.len(), 3);
    }

    #[test]
    fn input_is_length_limited() {
        let mut app = studio();
        let _ = app.update(Message::ProjectNameChanged("a".repeat(MAX_NAME_LENGTH * 2)));
        assert_eq!(app.cli.project_name.chars().count(), MAX_NAME_LENGTH);
    }
}
