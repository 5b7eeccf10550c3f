// Theme (de)serialization: JSON export/import, CSS custom properties, file names

use crate::error::ImportError;
use crate::model::{
    BorderConfig, ColorRole, ColorToken, FontSizeStep, OpacityConfig, RadiusStep, ShadowConfig,
    SpacingConfig, Theme, TypographyConfig,
};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::OnceLock;

/// File name used by the configuration panel export
pub const CONFIG_EXPORT_FILE_NAME: &str = "theme-config.json";

/// Downloadable theme formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Css,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Css => "text/css",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Css => write!(f, "CSS"),
        }
    }
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Whitespace pattern should be valid"))
}

// Lower-cases and replaces each run of whitespace with a hyphen
pub fn slugify(name: &str) -> String {
    whitespace_runs()
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

pub fn export_file_name(theme: &Theme, format: ExportFormat) -> String {
    format!("{}.{}", slugify(&theme.name), format.extension())
}

/// Pretty-printed JSON with two-space indentation
pub fn export_json(theme: &Theme) -> Result<String> {
    serde_json::to_string_pretty(theme).context("Failed to serialize theme")
}

/// CSS variable names in emission order
pub fn css_variable_names() -> Vec<String> {
    let colors = ColorRole::ALL.iter().map(|r| format!("color-{}", r.key()));
    let family = std::iter::once("font-family".to_string());
    let sizes = FontSizeStep::ALL
        .iter()
        .map(|s| format!("font-size-{}", s.key()));
    let radii = RadiusStep::ALL.iter().map(|s| format!("radius-{}", s.key()));
    colors.chain(family).chain(sizes).chain(radii).collect()
}

// Single :root block; values are emitted verbatim
pub fn export_css(theme: &Theme) -> String {
    let mut css = String::from(":root {\n  /* Colors */\n");
    for role in ColorRole::ALL {
        let _ = writeln!(css, "  --color-{}: {};", role.key(), theme.colors.get(role));
    }

    css.push_str("  \n  /* Typography */\n");
    let _ = writeln!(css, "  --font-family: {};", theme.typography.font_family);
    for step in FontSizeStep::ALL {
        let _ = writeln!(
            css,
            "  --font-size-{}: {};",
            step.key(),
            theme.typography.font_size.get(step)
        );
    }

    css.push_str("  \n  /* Border Radius */\n");
    for step in RadiusStep::ALL {
        let _ = writeln!(
            css,
            "  --radius-{}: {};",
            step.key(),
            theme.border_radius.get(step)
        );
    }
    css.push('}');
    css
}

// Accepts an object with non-empty `id` and `name` strings and a `colors` object
pub fn import_json(text: &str) -> Result<Theme, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Malformed)?;
    let object = value.as_object().ok_or(ImportError::NotAnObject)?;

    for field in ["id", "name"] {
        let present = object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !present {
            return Err(ImportError::MissingField(field));
        }
    }
    if !object.get("colors").is_some_and(Value::is_object) {
        return Err(ImportError::MissingField("colors"));
    }

    serde_json::from_value(value).map_err(ImportError::InvalidShape)
}

/// Everything the configuration panel exports
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSnapshot {
    pub colors: Vec<ColorToken>,
    pub typography: TypographyConfig,
    pub spacing: SpacingConfig,
    pub border: BorderConfig,
    pub shadow: ShadowConfig,
    pub opacity: OpacityConfig,
    pub dark_mode: bool,
}

pub fn export_configuration(snapshot: &ConfigurationSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize configuration")
}
