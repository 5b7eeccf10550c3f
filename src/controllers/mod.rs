// Per-tab UI state; stores are passed in explicitly by the application

mod cli;
mod components;
mod configuration;
mod flash;
mod themes;
mod tokens;

pub use cli::{CliGuidePanel, DEFAULT_PROJECT_NAME};
pub use components::ComponentsPanel;
pub use configuration::{
    ConfigurationPanel, NumericField, FONT_FAMILIES, FONT_SIZES, FONT_WEIGHTS,
};
pub use flash::{Flash, COPIED_TIMEOUT, SAVED_TIMEOUT};
pub use themes::{DialogState, ExportFile, ThemeManagerPanel};
pub use tokens::TokensPanel;
