// Theme records: the bundle edited by the theme manager and exported to JSON/CSS

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix of every generated theme id
pub const THEME_ID_PREFIX: &str = "theme-";

/// A complete theme bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colors: ThemeColors,
    #[serde(default)]
    pub typography: ThemeTypography,
    #[serde(default)]
    pub spacing: ThemeSpacing,
    #[serde(default)]
    pub border_radius: BorderRadius,
}

/// The seven fixed color slots of a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeTypography {
    pub font_family: String,
    pub font_size: FontSizes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpacing {
    pub unit: String,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderRadius {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

/// Fixed color keys of [`ThemeColors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Foreground,
    Muted,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Muted,
        ColorRole::Border,
    ];

    /// Key as it appears in JSON and CSS variable names
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Muted => "muted",
            ColorRole::Border => "border",
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSizeStep {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xxl,
}

impl FontSizeStep {
    pub const ALL: [FontSizeStep; 6] = [
        FontSizeStep::Xs,
        FontSizeStep::Sm,
        FontSizeStep::Base,
        FontSizeStep::Lg,
        FontSizeStep::Xl,
        FontSizeStep::Xxl,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FontSizeStep::Xs => "xs",
            FontSizeStep::Sm => "sm",
            FontSizeStep::Base => "base",
            FontSizeStep::Lg => "lg",
            FontSizeStep::Xl => "xl",
            FontSizeStep::Xxl => "2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusStep {
    Sm,
    Md,
    Lg,
    Full,
}

impl RadiusStep {
    pub const ALL: [RadiusStep; 4] = [
        RadiusStep::Sm,
        RadiusStep::Md,
        RadiusStep::Lg,
        RadiusStep::Full,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RadiusStep::Sm => "sm",
            RadiusStep::Md => "md",
            RadiusStep::Lg => "lg",
            RadiusStep::Full => "full",
        }
    }
}

impl ThemeColors {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Foreground => &self.foreground,
            ColorRole::Muted => &self.muted,
            ColorRole::Border => &self.border,
        }
    }

    pub fn set(&mut self, role: ColorRole, value: impl Into<String>) {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Background => &mut self.background,
            ColorRole::Foreground => &mut self.foreground,
            ColorRole::Muted => &mut self.muted,
            ColorRole::Border => &mut self.border,
        };
        *slot = value.into();
    }
}

impl FontSizes {
    pub fn get(&self, step: FontSizeStep) -> &str {
        match step {
            FontSizeStep::Xs => &self.xs,
            FontSizeStep::Sm => &self.sm,
            FontSizeStep::Base => &self.base,
            FontSizeStep::Lg => &self.lg,
            FontSizeStep::Xl => &self.xl,
            FontSizeStep::Xxl => &self.xxl,
        }
    }

    pub fn set(&mut self, step: FontSizeStep, value: impl Into<String>) {
        let slot = match step {
            FontSizeStep::Xs => &mut self.xs,
            FontSizeStep::Sm => &mut self.sm,
            FontSizeStep::Base => &mut self.base,
            FontSizeStep::Lg => &mut self.lg,
            FontSizeStep::Xl => &mut self.xl,
            FontSizeStep::Xxl => &mut self.xxl,
        };
        *slot = value.into();
    }
}

impl BorderRadius {
    pub fn get(&self, step: RadiusStep) -> &str {
        match step {
            RadiusStep::Sm => &self.sm,
            RadiusStep::Md => &self.md,
            RadiusStep::Lg => &self.lg,
            RadiusStep::Full => &self.full,
        }
    }

    pub fn set(&mut self, step: RadiusStep, value: impl Into<String>) {
        let slot = match step {
            RadiusStep::Sm => &mut self.sm,
            RadiusStep::Md => &mut self.md,
            RadiusStep::Lg => &mut self.lg,
            RadiusStep::Full => &mut self.full,
        };
        *slot = value.into();
    }
}

// Absent sections of an imported theme fall back to the default template values

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#0f172a".into(),
            secondary: "#64748b".into(),
            accent: "#0ea5e9".into(),
            background: "#ffffff".into(),
            foreground: "#0f172a".into(),
            muted: "#f1f5f9".into(),
            border: "#e2e8f0".into(),
        }
    }
}

impl Default for ThemeTypography {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".into(),
            font_size: FontSizes::default(),
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            xs: "0.75rem".into(),
            sm: "0.875rem".into(),
            base: "1rem".into(),
            lg: "1.125rem".into(),
            xl: "1.25rem".into(),
            xxl: "1.5rem".into(),
        }
    }
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            unit: "rem".into(),
            scale: vec![
                0.0, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0,
                16.0, 20.0, 24.0,
            ],
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            sm: "0.125rem".into(),
            md: "0.375rem".into(),
            lg: "0.5rem".into(),
            full: "9999px".into(),
        }
    }
}

impl Theme {
    /// Template every new theme is cloned from
    pub fn default_template() -> Self {
        Self {
            id: "1".into(),
            name: "Default Theme".into(),
            description: "The default theme for the application".into(),
            colors: ThemeColors::default(),
            typography: ThemeTypography::default(),
            spacing: ThemeSpacing::default(),
            border_radius: BorderRadius::default(),
        }
    }

    pub fn brand_template() -> Self {
        Self {
            id: "2".into(),
            name: "Brand Theme".into(),
            description: "A branded theme with custom colors".into(),
            colors: ThemeColors {
                primary: "#3b82f6".into(),
                secondary: "#6366f1".into(),
                accent: "#ec4899".into(),
                background: "#f8fafc".into(),
                foreground: "#1e293b".into(),
                muted: "#f1f5f9".into(),
                border: "#e2e8f0".into(),
            },
            typography: ThemeTypography {
                font_family: "Poppins, sans-serif".into(),
                font_size: FontSizes::default(),
            },
            spacing: ThemeSpacing::default(),
            border_radius: BorderRadius {
                sm: "0.25rem".into(),
                md: "0.5rem".into(),
                lg: "1rem".into(),
                full: "9999px".into(),
            },
        }
    }

    pub fn dark_template() -> Self {
        Self {
            id: "3".into(),
            name: "Dark Theme".into(),
            description: "A dark theme for night mode".into(),
            colors: ThemeColors {
                primary: "#f8fafc".into(),
                secondary: "#94a3b8".into(),
                accent: "#0ea5e9".into(),
                background: "#0f172a".into(),
                foreground: "#f8fafc".into(),
                muted: "#1e293b".into(),
                border: "#334155".into(),
            },
            typography: ThemeTypography::default(),
            spacing: ThemeSpacing::default(),
            border_radius: BorderRadius::default(),
        }
    }

    /// Themes available when the application starts
    pub fn builtin() -> Vec<Theme> {
        vec![
            Self::default_template(),
            Self::brand_template(),
            Self::dark_template(),
        ]
    }
}

// Timestamp-derived id; callers that need uniqueness go through the theme store
pub fn timestamp_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{}{}", THEME_ID_PREFIX, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_roles_cover_every_slot_in_order() {
        let theme = Theme::dark_template();
        let values: Vec<&str> = ColorRole::ALL
            .iter()
            .map(|r| theme.colors.get(*r))
            .collect();
        assert_eq!(
            values,
            vec!["#f8fafc", "#94a3b8", "#0ea5e9", "#0f172a", "#f8fafc", "#1e293b", "#334155"]
        );
    }

    #[test]
    fn setters_touch_only_their_slot() {
        let mut colors = ThemeColors::default();
        colors.set(ColorRole::Accent, "#123456");
        assert_eq!(colors.accent, "#123456");
        assert_eq!(colors.primary, ThemeColors::default().primary);

        let mut sizes = FontSizes::default();
        sizes.set(FontSizeStep::Xxl, "2rem");
        assert_eq!(sizes.get(FontSizeStep::Xxl), "2rem");
        assert_eq!(sizes.get(FontSizeStep::Xl), "1.25rem");
    }

    #[test]
    fn builtin_ids_are_unique() {
        let themes = Theme::builtin();
        let mut ids: Vec<&str> = themes.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), themes.len());
    }

    #[test]
    fn timestamp_ids_carry_prefix() {
        let id = timestamp_id();
        assert!(id.starts_with(THEME_ID_PREFIX));
        assert!(id[THEME_ID_PREFIX.len()..].parse::<u128>().is_ok());
    }
}
