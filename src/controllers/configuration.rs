// Configuration panel: palette, typography, spacing, border, shadow and opacity editing

use super::flash::{Flash, SAVED_TIMEOUT};
use crate::error::TokenError;
use crate::model::{
    BorderConfig, OpacityConfig, ShadowConfig, SpacingConfig, SpacingUnit, TypographyConfig,
};
use crate::serialize::{export_configuration, ConfigurationSnapshot};
use crate::store::TokenStore;
use crate::types::ConfigTab;
use anyhow::Result;
use std::time::Instant;
use tracing::info;

pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("Inter", "Inter, sans-serif"),
    ("Roboto", "Roboto, sans-serif"),
    ("Open Sans", "'Open Sans', sans-serif"),
    ("Playfair Display", "'Playfair Display', serif"),
    ("System UI", "system-ui, sans-serif"),
];

pub const FONT_SIZES: &[&str] = &["14px", "16px", "18px"];

pub const FONT_WEIGHTS: &[(&str, &str)] = &[
    ("Light (300)", "300"),
    ("Regular (400)", "400"),
    ("Medium (500)", "500"),
    ("Semibold (600)", "600"),
    ("Bold (700)", "700"),
];

/// Setter targets for numeric fields edited through sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    SpacingScale,
    BorderRadius,
    BorderWidth,
    ShadowOffsetX,
    ShadowOffsetY,
    ShadowBlur,
    ShadowSpread,
    OpacityDisabled,
    OpacityOverlay,
}

#[derive(Debug, Clone)]
pub struct ConfigurationPanel {
    pub tab: ConfigTab,
    pub typography: TypographyConfig,
    pub spacing: SpacingConfig,
    pub border: BorderConfig,
    pub shadow: ShadowConfig,
    pub opacity: OpacityConfig,
    pub dark_mode: bool,
    saved: Flash<()>,
}

impl Default for ConfigurationPanel {
    fn default() -> Self {
        Self {
            tab: ConfigTab::default(),
            typography: TypographyConfig::default(),
            spacing: SpacingConfig::default(),
            border: BorderConfig::default(),
            shadow: ShadowConfig::default(),
            opacity: OpacityConfig::default(),
            dark_mode: false,
            saved: Flash::new(SAVED_TIMEOUT),
        }
    }
}

impl ConfigurationPanel {
    pub fn set_tab(&mut self, tab: ConfigTab) {
        self.tab = tab;
    }

    pub fn set_color(
        &mut self,
        tokens: &mut TokenStore,
        index: usize,
        value: String,
    ) -> Result<(), TokenError> {
        tokens.set_palette_color(index, value)?;
        self.saved.clear();
        Ok(())
    }

    pub fn set_font_family(&mut self, value: &str) {
        self.typography.set_font_family(value);
        self.saved.clear();
    }

    pub fn set_font_size(&mut self, value: &str) {
        self.typography.set_font_size(value);
        self.saved.clear();
    }

    pub fn set_font_weight(&mut self, value: &str) {
        self.typography.set_font_weight(value);
        self.saved.clear();
    }

    pub fn set_spacing_unit(&mut self, unit: SpacingUnit) {
        self.spacing.set_unit(unit);
        self.saved.clear();
    }

    pub fn set_shadow_color(&mut self, value: String) {
        self.shadow.set_color(value);
        self.saved.clear();
    }

    pub fn set_numeric(&mut self, field: NumericField, value: f32) {
        match field {
            NumericField::SpacingScale => self.spacing.set_scale(value),
            NumericField::BorderRadius => self.border.set_radius(value),
            NumericField::BorderWidth => self.border.set_width(value),
            NumericField::ShadowOffsetX => self.shadow.set_offset_x(value),
            NumericField::ShadowOffsetY => self.shadow.set_offset_y(value),
            NumericField::ShadowBlur => self.shadow.set_blur(value),
            NumericField::ShadowSpread => self.shadow.set_spread(value),
            NumericField::OpacityDisabled => self.opacity.set_disabled(value),
            NumericField::OpacityOverlay => self.opacity.set_overlay(value),
        }
        self.saved.clear();
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }

    // Nothing leaves the session; the indicator only acknowledges the action
    pub fn save(&mut self, now: Instant) {
        info!("Configuration saved");
        self.saved.trigger((), now);
    }

    pub fn is_saved(&self) -> bool {
        self.saved.is_active(&())
    }

    pub fn is_pending(&self) -> bool {
        self.saved.is_pending()
    }

    pub fn tick(&mut self, now: Instant) {
        self.saved.expire(now);
    }

    pub fn snapshot(&self, tokens: &TokenStore) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            colors: tokens.palette().to_vec(),
            typography: self.typography.clone(),
            spacing: self.spacing,
            border: self.border,
            shadow: self.shadow.clone(),
            opacity: self.opacity,
            dark_mode: self.dark_mode,
        }
    }

    pub fn export(&self, tokens: &TokenStore) -> Result<String> {
        export_configuration(&self.snapshot(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn edits_clear_saved_indicator() {
        let mut panel = ConfigurationPanel::default();
        let now = Instant::now();
        panel.save(now);
        assert!(panel.is_saved());
        panel.set_font_weight("700");
        assert!(!panel.is_saved());
        assert_eq!(panel.typography.font_weight, "700");
    }

    #[test]
    fn saved_indicator_expires_after_three_seconds() {
        let mut panel = ConfigurationPanel::default();
        let now = Instant::now();
        panel.save(now);
        panel.tick(now + Duration::from_millis(2500));
        assert!(panel.is_saved());
        panel.tick(now + Duration::from_secs(3));
        assert!(!panel.is_saved());
    }

    #[test]
    fn palette_edits_go_through_token_store() {
        let mut panel = ConfigurationPanel::default();
        let mut tokens = TokenStore::default();
        panel.set_color(&mut tokens, 2, "#abcdef".into()).unwrap();
        assert_eq!(tokens.palette()[2].value, "#abcdef");
        assert!(panel.set_color(&mut tokens, 42, "#000".into()).is_err());
    }

    #[test]
    fn numeric_setters_route_to_typed_records() {
        let mut panel = ConfigurationPanel::default();
        panel.set_numeric(NumericField::SpacingScale, 0.5);
        panel.set_numeric(NumericField::BorderWidth, 2.0);
        panel.set_numeric(NumericField::OpacityOverlay, 0.25);
        panel.set_numeric(NumericField::ShadowBlur, -3.0);
        assert_eq!(panel.spacing.scale, 0.5);
        assert_eq!(panel.border.width, 2.0);
        assert_eq!(panel.opacity.overlay, 0.25);
        assert_eq!(panel.shadow.blur, 0.0);
    }

    #[test]
    fn export_includes_palette_and_dark_mode() {
        let mut panel = ConfigurationPanel::default();
        panel.set_dark_mode(true);
        let json = panel.export(&TokenStore::default()).unwrap();
        assert!(json.contains("\"destructive\""));
        assert!(json.contains("\"darkMode\": true"));
    }
}
