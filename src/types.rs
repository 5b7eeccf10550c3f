// Shared navigation types used across modules

/// Top-level application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Configuration,
    Tokens,
    Components,
    Themes,
    CliGuide,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Configuration,
        Panel::Tokens,
        Panel::Components,
        Panel::Themes,
        Panel::CliGuide,
    ];

    /// Stable key used by the settings database
    pub fn key(self) -> &'static str {
        match self {
            Panel::Configuration => "configuration",
            Panel::Tokens => "tokens",
            Panel::Components => "components",
            Panel::Themes => "themes",
            Panel::CliGuide => "cli",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Panel::Configuration => write!(f, "Configuration"),
            Panel::Tokens => write!(f, "Tokens"),
            Panel::Components => write!(f, "Components"),
            Panel::Themes => write!(f, "Themes"),
            Panel::CliGuide => write!(f, "CLI Guide"),
        }
    }
}

/// Configuration panel sub-tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigTab {
    #[default]
    Colors,
    Typography,
    Spacing,
    Border,
    Shadow,
    Opacity,
}

impl ConfigTab {
    pub const ALL: [ConfigTab; 6] = [
        ConfigTab::Colors,
        ConfigTab::Typography,
        ConfigTab::Spacing,
        ConfigTab::Border,
        ConfigTab::Shadow,
        ConfigTab::Opacity,
    ];
}

impl std::fmt::Display for ConfigTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTab::Colors => write!(f, "Colors"),
            ConfigTab::Typography => write!(f, "Typography"),
            ConfigTab::Spacing => write!(f, "Spacing"),
            ConfigTab::Border => write!(f, "Border"),
            ConfigTab::Shadow => write!(f, "Shadow"),
            ConfigTab::Opacity => write!(f, "Opacity"),
        }
    }
}

/// Tokens panel sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenSubmenu {
    #[default]
    Border,
    Color,
    Types,
    Space,
}

impl TokenSubmenu {
    pub const ALL: [TokenSubmenu; 4] = [
        TokenSubmenu::Border,
        TokenSubmenu::Color,
        TokenSubmenu::Types,
        TokenSubmenu::Space,
    ];
}

impl std::fmt::Display for TokenSubmenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSubmenu::Border => write!(f, "Border"),
            TokenSubmenu::Color => write!(f, "Color"),
            TokenSubmenu::Types => write!(f, "Types"),
            TokenSubmenu::Space => write!(f, "Space"),
        }
    }
}

/// Theme manager sub-tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ManagerTab {
    #[default]
    Themes,
    Export,
}

impl std::fmt::Display for ManagerTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerTab::Themes => write!(f, "Themes"),
            ManagerTab::Export => write!(f, "Export"),
        }
    }
}

/// CLI guide sub-tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CliTab {
    #[default]
    Installation,
    Commands,
    Builder,
    Examples,
}

impl CliTab {
    pub const ALL: [CliTab; 4] = [
        CliTab::Installation,
        CliTab::Commands,
        CliTab::Builder,
        CliTab::Examples,
    ];
}

impl std::fmt::Display for CliTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliTab::Installation => write!(f, "Installation"),
            CliTab::Commands => write!(f, "Commands"),
            CliTab::Builder => write!(f, "Command Builder"),
            CliTab::Examples => write!(f, "Examples"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_keys_round_trip() {
        for panel in Panel::ALL {
            assert_eq!(Panel::from_key(panel.key()), Some(panel));
        }
        assert_eq!(Panel::from_key("bogus"), None);
    }
}
