// CLI guide: sub-tabs, command builder and copied indicator

use super::flash::{Flash, COPIED_TIMEOUT};
use crate::catalog::commands::{build_create_command, ThemeOption};
use crate::types::CliTab;
use std::time::Instant;

pub const DEFAULT_PROJECT_NAME: &str = "my-white-label-app";

#[derive(Debug, Clone)]
pub struct CliGuidePanel {
    pub tab: CliTab,
    pub project_name: String,
    pub theme: ThemeOption,
    copied: Flash<String>,
}

impl Default for CliGuidePanel {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl CliGuidePanel {
    pub fn new(project_name: String) -> Self {
        Self {
            tab: CliTab::default(),
            project_name,
            theme: ThemeOption::default(),
            copied: Flash::new(COPIED_TIMEOUT),
        }
    }

    pub fn set_tab(&mut self, tab: CliTab) {
        self.tab = tab;
    }

    pub fn set_project_name(&mut self, name: String) {
        self.project_name = name;
    }

    pub fn set_theme(&mut self, theme: ThemeOption) {
        self.theme = theme;
    }

    pub fn built_command(&self) -> String {
        build_create_command(&self.project_name, self.theme)
    }

    /// Marks the command as copied and returns the text for the clipboard
    pub fn copy(&mut self, command: String, now: Instant) -> String {
        self.copied.trigger(command.clone(), now);
        command
    }

    pub fn is_copied(&self, command: &str) -> bool {
        self.copied.is_active(&command.to_string())
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
    fn builder_tracks_inputs() {
        let mut panel = CliGuidePanel::default();
        assert_eq!(
            panel.built_command(),
            "white-label create my-white-label-app --theme default"
        );
        panel.set_project_name("acme".into());
        panel.set_theme(ThemeOption::Dark);
        assert_eq!(panel.built_command(), "white-label create acme --theme dark");
    }

    #[test]
    fn copied_flag_resets_after_two_seconds() {
        let mut panel = CliGuidePanel::default();
        let now = Instant::now();
        let text = panel.copy("white-label help".into(), now);
        assert_eq!(text, "white-label help");
        assert!(panel.is_copied("white-label help"));
        panel.tick(now + Duration::from_millis(1500));
        assert!(panel.is_copied("white-label help"));
        panel.tick(now + Duration::from_millis(2000));
        assert!(!panel.is_copied("white-label help"));
    }
}
