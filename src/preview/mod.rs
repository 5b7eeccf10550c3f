// Read-only projection of a theme into inline style values for the preview surface

use crate::model::{ColorRole, SpacingConfig, SpacingUnit, Theme};

/// Text color used on filled buttons
pub const BUTTON_TEXT: &str = "#fff";

/// Style values for one preview element; `None` means inherited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStyle {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub border_color: Option<String>,
    pub border_radius: Option<String>,
    pub font_family: Option<String>,
}

/// Styles for every element of the theme preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap {
    pub surface: ElementStyle,
    pub heading: ElementStyle,
    pub primary_button: ElementStyle,
    pub secondary_button: ElementStyle,
    pub muted_panel: ElementStyle,
    pub accent_panel: ElementStyle,
}

// Swaps background and foreground when dark_mode is set, whatever the theme's own colors
pub fn render_preview(theme: &Theme, dark_mode: bool) -> StyleMap {
    let colors = &theme.colors;
    let (background, foreground) = if dark_mode {
        (&colors.foreground, &colors.background)
    } else {
        (&colors.background, &colors.foreground)
    };
    let radius = Some(theme.border_radius.md.clone());
    let filled = |fill: &str| ElementStyle {
        background: Some(fill.to_string()),
        foreground: Some(BUTTON_TEXT.to_string()),
        border_radius: radius.clone(),
        ..ElementStyle::default()
    };

    StyleMap {
        surface: ElementStyle {
            background: Some(background.clone()),
            foreground: Some(foreground.clone()),
            border_radius: Some(theme.border_radius.lg.clone()),
            ..ElementStyle::default()
        },
        heading: ElementStyle {
            foreground: Some(foreground.clone()),
            font_family: Some(theme.typography.font_family.clone()),
            ..ElementStyle::default()
        },
        primary_button: filled(&colors.primary),
        secondary_button: filled(&colors.secondary),
        muted_panel: ElementStyle {
            background: Some(colors.muted.clone()),
            foreground: Some(foreground.clone()),
            border_color: Some(colors.border.clone()),
            border_radius: radius.clone(),
            ..ElementStyle::default()
        },
        accent_panel: ElementStyle {
            foreground: Some(foreground.clone()),
            border_color: Some(colors.accent.clone()),
            border_radius: radius,
            ..ElementStyle::default()
        },
    }
}

/// Color swatches in fixed role order
pub fn swatches(theme: &Theme) -> Vec<(ColorRole, &str)> {
    ColorRole::ALL
        .iter()
        .map(|role| (*role, theme.colors.get(*role)))
        .collect()
}

/// Edge lengths of the five spacing preview boxes
pub fn spacing_preview(spacing: &SpacingConfig) -> Vec<String> {
    let factor = match spacing.unit {
        SpacingUnit::Px => 16.0,
        SpacingUnit::Rem | SpacingUnit::Em => 1.0,
    };
    (1..=5)
        .map(|k| {
            format!(
                "{}{}",
                spacing.scale * k as f32 * factor,
                spacing.unit.as_str()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_swaps_surface_colors() {
        let theme = Theme::default_template();
        let light = render_preview(&theme, false);
        let dark = render_preview(&theme, true);
        assert_eq!(light.surface.background.as_deref(), Some("#ffffff"));
        assert_eq!(dark.surface.background.as_deref(), Some("#0f172a"));
        assert_eq!(dark.surface.foreground.as_deref(), Some("#ffffff"));
        assert_eq!(dark.heading.foreground, dark.surface.foreground);
    }

    #[test]
    fn buttons_use_brand_colors_and_md_radius() {
        let theme = Theme::brand_template();
        let styles = render_preview(&theme, false);
        assert_eq!(styles.primary_button.background.as_deref(), Some("#3b82f6"));
        assert_eq!(styles.secondary_button.background.as_deref(), Some("#6366f1"));
        assert_eq!(styles.primary_button.foreground.as_deref(), Some(BUTTON_TEXT));
        assert_eq!(styles.primary_button.border_radius.as_deref(), Some("0.5rem"));
        assert_eq!(styles.accent_panel.border_color.as_deref(), Some("#ec4899"));
        assert_eq!(styles.heading.font_family.as_deref(), Some("Poppins, sans-serif"));
    }

    #[test]
    fn spacing_preview_scales_px_by_sixteen() {
        let rem = SpacingConfig::default();
        assert_eq!(
            spacing_preview(&rem),
            vec!["0.25rem", "0.5rem", "0.75rem", "1rem", "1.25rem"]
        );
        let px = SpacingConfig {
            unit: SpacingUnit::Px,
            scale: 0.5,
        };
        assert_eq!(spacing_preview(&px)[0], "8px");
        assert_eq!(spacing_preview(&px)[4], "40px");
    }

    #[test]
    fn swatches_follow_role_order() {
        let theme = Theme::default_template();
        let keys: Vec<&str> = swatches(&theme).iter().map(|(r, _)| r.key()).collect();
        assert_eq!(
            keys,
            vec!["primary", "secondary", "accent", "background", "foreground", "muted", "border"]
        );
    }
}
