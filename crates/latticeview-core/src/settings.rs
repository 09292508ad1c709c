use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// 24-bit RGB color, serialized as a plain integer (`0xRRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const WHITE: Color = Color::from_hex(0xffffff);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_f32_array(&self, opacity: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            opacity,
        ]
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::from_hex(hex)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Default colors per defect category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSet {
    pub rough: Color,
    pub smooth: Color,
    pub module: Color,
    pub pin: Color,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self {
            rough: Color::from_hex(0xffffff),
            smooth: Color::from_hex(0x1e90ff),
            module: Color::from_hex(0xffefd5),
            pin: Color::from_hex(0xfff095),
        }
    }
}

/// Visual attributes carried by every solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visuals {
    pub color: Color,
    pub transparent: bool,
    pub opacity: f32,
}

impl Visuals {
    pub fn new(color: Color, transparent: bool, opacity: f32) -> Self {
        Self {
            color,
            transparent,
            opacity,
        }
    }

    /// The configured defaults for an unclassified solid.
    pub fn defaults(settings: &Settings) -> Self {
        Self::new(
            settings.default_color,
            settings.default_transparent,
            settings.default_opacity,
        )
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Scene construction configuration, supplied by the surrounding application
/// and passed explicitly to every builder and mesh-emission call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World-unit multiplier applied when emitting solids.
    pub scale: f64,
    /// Lattice spacing between unit cells (>= 1).
    pub margin: u32,
    pub color_set: ColorSet,
    pub default_color: Color,
    pub default_transparent: bool,
    pub default_opacity: f32,
    /// Request a wireframe overlay for every drawn solid.
    pub display_edges: bool,
    pub edge_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            margin: 1,
            color_set: ColorSet::default(),
            default_color: Color::WHITE,
            default_transparent: false,
            default_opacity: 0.3,
            display_edges: true,
            edge_color: Color::BLACK,
        }
    }
}

impl Settings {
    /// Lattice unit spacing, `margin + 1`.
    pub fn pitch(&self) -> f64 {
        f64::from(self.margin) + 1.0
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.margin < 1 {
            return Err(SettingsError::InvalidMargin(self.margin));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SettingsError::InvalidScale(self.scale));
        }
        if !(0.0..=1.0).contains(&self.default_opacity) {
            return Err(SettingsError::InvalidOpacity(self.default_opacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pitch() {
        let settings = Settings::default();
        assert!((settings.pitch() - 2.0).abs() < 1e-10);
        assert!((settings.with_margin(3).pitch() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_color_hex_roundtrip() {
        let c = Color::from_hex(0x1e90ff);
        assert_eq!((c.r, c.g, c.b), (0x1e, 0x90, 0xff));
        assert_eq!(c.to_hex(), 0x1e90ff);
        let rgba = c.to_f32_array(0.5);
        assert!((rgba[2] - 1.0).abs() < 1e-6);
        assert!((rgba[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Settings::default().validate().is_ok());
        assert!(matches!(
            Settings::default().with_margin(0).validate(),
            Err(SettingsError::InvalidMargin(0))
        ));
        assert!(Settings::default().with_scale(0.0).validate().is_err());
        let mut settings = Settings::default();
        settings.default_opacity = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_settings_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"margin": 2, "color_set": {"smooth": 255}}"#).unwrap();
        assert_eq!(settings.margin, 2);
        assert_eq!(settings.color_set.smooth, Color::from_hex(0x0000ff));
        assert_eq!(settings.color_set.rough, Color::WHITE);
        assert!(settings.display_edges);
    }
}
