// Illustrative commands of the external white-label CLI; nothing here is executed

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub command: &'static str,
    pub description: &'static str,
}

const fn cmd(command: &'static str, description: &'static str) -> CommandEntry {
    CommandEntry {
        command,
        description,
    }
}

pub const INSTALLATION: &[CommandEntry] = &[
    cmd("npm install -g white-label-cli", "Install CLI globally"),
    cmd("yarn global add white-label-cli", "Alternative using Yarn"),
];

pub const VERIFY: &[CommandEntry] = &[cmd("white-label --version", "Check installed version")];

pub const COMMANDS: &[CommandEntry] = &[
    cmd("white-label create <project-name>", "Create a new project"),
    cmd("white-label themes list", "List available themes"),
    cmd(
        "white-label themes import <path-to-json>",
        "Import a theme configuration",
    ),
    cmd(
        "white-label components add <component-name>",
        "Add a component to existing project",
    ),
    cmd("white-label help", "Show help information"),
];

pub const EXAMPLES: &[CommandEntry] = &[
    cmd(
        "white-label create my-react-app --template react --theme default",
        "React with default theme",
    ),
    cmd(
        "white-label create admin-dashboard --template nextjs --theme dark --components dashboard,auth",
        "Next.js with dark theme and dashboard components",
    ),
    cmd(
        "white-label create ecommerce-store --template vite --theme custom --theme-path ./my-brand-theme.json",
        "Vite project with custom theme",
    ),
];

/// Theme choices offered by the command builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeOption {
    #[default]
    Default,
    Dark,
    Light,
    Custom,
}

impl ThemeOption {
    pub const ALL: [ThemeOption; 4] = [
        ThemeOption::Default,
        ThemeOption::Dark,
        ThemeOption::Light,
        ThemeOption::Custom,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ThemeOption::Default => "default",
            ThemeOption::Dark => "dark",
            ThemeOption::Light => "light",
            ThemeOption::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeOption::Default => write!(f, "Default"),
            ThemeOption::Dark => write!(f, "Dark"),
            ThemeOption::Light => write!(f, "Light"),
            ThemeOption::Custom => write!(f, "Custom"),
        }
    }
}

pub fn build_create_command(project_name: &str, theme: ThemeOption) -> String {
    format!(
        "white-label create {} --theme {}",
        project_name,
        theme.value()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_formats_create_command() {
        assert_eq!(
            build_create_command("my-white-label-app", ThemeOption::Default),
            "white-label create my-white-label-app --theme default"
        );
        assert_eq!(
            build_create_command("shop", ThemeOption::Custom),
            "white-label create shop --theme custom"
        );
    }
}
