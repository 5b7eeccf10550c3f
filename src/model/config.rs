// Typed configuration families edited by the configuration panel

use serde::{Deserialize, Serialize};

pub const SPACING_SCALE_MIN: f32 = 0.125;
pub const SPACING_SCALE_MAX: f32 = 1.0;
pub const SPACING_SCALE_STEP: f32 = 0.125;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".into(),
            font_size: "16px".into(),
            font_weight: "400".into(),
        }
    }
}

impl TypographyConfig {
    pub fn set_font_family(&mut self, value: impl Into<String>) {
        self.font_family = value.into();
    }

    pub fn set_font_size(&mut self, value: impl Into<String>) {
        self.font_size = value.into();
    }

    pub fn set_font_weight(&mut self, value: impl Into<String>) {
        self.font_weight = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingUnit {
    Px,
    #[default]
    Rem,
    Em,
}

impl SpacingUnit {
    pub const ALL: [SpacingUnit; 3] = [SpacingUnit::Px, SpacingUnit::Rem, SpacingUnit::Em];

    pub fn as_str(self) -> &'static str {
        match self {
            SpacingUnit::Px => "px",
            SpacingUnit::Rem => "rem",
            SpacingUnit::Em => "em",
        }
    }
}

impl std::fmt::Display for SpacingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpacingUnit::Px => write!(f, "Pixels (px)"),
            SpacingUnit::Rem => write!(f, "REM"),
            SpacingUnit::Em => write!(f, "EM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingConfig {
    pub unit: SpacingUnit,
    pub scale: f32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            unit: SpacingUnit::Rem,
            scale: 0.25,
        }
    }
}

impl SpacingConfig {
    pub fn set_unit(&mut self, unit: SpacingUnit) {
        self.unit = unit;
    }

    // Clamps to the slider range and snaps to its step
    pub fn set_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(SPACING_SCALE_MIN, SPACING_SCALE_MAX);
        self.scale = (clamped / SPACING_SCALE_STEP).round() * SPACING_SCALE_STEP;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    pub radius: f32,
    pub width: f32,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            width: 1.0,
        }
    }
}

impl BorderConfig {
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }
}

/// Box shadow parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: String,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 6.0,
            spread: -1.0,
            color: "rgba(0, 0, 0, 0.1)".into(),
        }
    }
}

impl ShadowConfig {
    pub fn set_offset_x(&mut self, value: f32) {
        self.offset_x = value;
    }

    pub fn set_offset_y(&mut self, value: f32) {
        self.offset_y = value;
    }

    pub fn set_blur(&mut self, value: f32) {
        self.blur = value.max(0.0);
    }

    pub fn set_spread(&mut self, value: f32) {
        self.spread = value;
    }

    pub fn set_color(&mut self, value: impl Into<String>) {
        self.color = value.into();
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityConfig {
    pub disabled: f32,
    pub overlay: f32,
}

impl Default for OpacityConfig {
    fn default() -> Self {
        Self {
            disabled: 0.6,
            overlay: 0.5,
        }
    }
}

impl OpacityConfig {
    pub fn set_disabled(&mut self, value: f32) {
        self.disabled = value.clamp(0.0, 1.0);
    }

    pub fn set_overlay(&mut self, value: f32) {
        self.overlay = value.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_snaps_to_slider_steps() {
        let mut spacing = SpacingConfig::default();
        spacing.set_scale(0.3);
        assert_eq!(spacing.scale, 0.25);
        spacing.set_scale(5.0);
        assert_eq!(spacing.scale, SPACING_SCALE_MAX);
        spacing.set_scale(0.0);
        assert_eq!(spacing.scale, SPACING_SCALE_MIN);
        spacing.set_scale(f32::NAN);
        assert_eq!(spacing.scale, SPACING_SCALE_MIN);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut opacity = OpacityConfig::default();
        opacity.set_disabled(1.5);
        opacity.set_overlay(-0.2);
        assert_eq!(opacity.disabled, 1.0);
        assert_eq!(opacity.overlay, 0.0);
    }

    #[test]
    fn shadow_renders_css_value() {
        let shadow = ShadowConfig::default();
        assert_eq!(shadow.to_css(), "0px 4px 6px -1px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn spacing_unit_serializes_lowercase() {
        let json = serde_json::to_string(&SpacingConfig::default()).unwrap();
        assert_eq!(json, r#"{"unit":"rem","scale":0.25}"#);
    }
}
