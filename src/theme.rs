// Design system tokens for the editor's own chrome

use iced::Color;

// Font sizes
pub const FONT_XS: f32 = 12.0;
pub const FONT_SM: f32 = 13.0;
pub const FONT_MD: f32 = 14.0;
pub const FONT_LG: f32 = 16.0;
pub const FONT_XL: f32 = 24.0;

// Spacing
pub const SPACING_XS: u16 = 2;
pub const SPACING_SM: u16 = 5;
pub const SPACING_MD: u16 = 10;
pub const SPACING_LG: u16 = 20;

// Sizes
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const SWATCH_SIZE: f32 = 32.0;
pub const LIST_HEIGHT: f32 = 360.0;
pub const EXPORT_PREVIEW_HEIGHT: f32 = 380.0;

// Colors for dark mode
pub const COLOR_ERROR: Color = Color::from_rgb(1.0, 0.4, 0.4);
pub const COLOR_INFO: Color = Color::from_rgb(0.3, 0.8, 1.0);
pub const COLOR_MUTED_DARK: Color = Color::from_rgb(0.5, 0.5, 0.5);
pub const COLOR_PLACEHOLDER: Color = Color::from_rgb(0.8, 0.8, 0.8);

// Input limits
pub const MAX_NAME_LENGTH: usize = 128;
pub const MAX_VALUE_LENGTH: usize = 256;
pub const MAX_IMPORT_BYTES: u64 = 1024 * 1024;

// Window
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// Parses #rgb, #rrggbb and #rrggbbaa for painting swatches; token values stay verbatim
pub fn color_from_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Color::from_rgb8(rgb[0], rgb[1], rgb[2]))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 {
                f32::from(channel(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Color::from_rgba8(r, g, b, a))
        }
        _ => None,
    }
}

// Falls back to a neutral placeholder for values that are not plain hex
pub fn swatch_color(value: &str) -> Color {
    color_from_hex(value).unwrap_or(COLOR_PLACEHOLDER)
}

// Approximate pixel length of a CSS length; rem/em use a 16px root
pub fn css_length_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let (number, scale) = if let Some(n) = value.strip_suffix("rem") {
        (n, 16.0)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, 16.0)
    } else if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else {
        (value, 1.0)
    };
    number.trim().parse::<f32>().ok().map(|n| n * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(color_from_hex("#fff"), Some(Color::from_rgb8(255, 255, 255)));
        assert_eq!(color_from_hex("#0f172a"), Some(Color::from_rgb8(15, 23, 42)));
        assert_eq!(
            color_from_hex("#ff000080"),
            Some(Color::from_rgba8(255, 0, 0, 128.0 / 255.0))
        );
    }

    #[test]
    fn converts_css_lengths() {
        assert_eq!(css_length_px("0.5rem"), Some(8.0));
        assert_eq!(css_length_px("2em"), Some(32.0));
        assert_eq!(css_length_px("9999px"), Some(9999.0));
        assert_eq!(css_length_px("4"), Some(4.0));
        assert_eq!(css_length_px("50%"), None);
    }

    #[test]
    fn rejects_non_hex_values() {
        assert_eq!(color_from_hex("red"), None);
        assert_eq!(color_from_hex("#12"), None);
        assert_eq!(color_from_hex("#gggggg"), None);
        assert_eq!(swatch_color("rgba(0,0,0,0.1)"), COLOR_PLACEHOLDER);
    }
}
