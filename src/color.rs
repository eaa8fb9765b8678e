//! HsvColor, the color value the panel reads and proposes updates for.
//!
//! Stores hue in degrees (0–360) and saturation, value and alpha in the
//! 0.0–1.0 range. Saturation and value are kept as-is rather than
//! re-derived from RGB, so a gray color still remembers its hue.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::geometry::SaturationValue;
use crate::math;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl Default for HsvColor {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            value: 0.5,
            alpha: 1.0,
        }
    }
}

impl HsvColor {
    /// Create an opaque color. Hue wraps into 0–360, the rest is clamped.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Same hue and alpha, new saturation/value pair.
    pub fn with_saturation_value(self, sv: SaturationValue) -> Self {
        Self {
            saturation: sv.saturation.clamp(0.0, 1.0),
            value: sv.value.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Hue in degrees (0.0–360.0).
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// Saturation (0.0–1.0).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    /// Value / brightness (0.0–1.0).
    pub fn value(&self) -> f64 {
        self.value
    }
    /// Alpha (0.0–1.0).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn saturation_value(&self) -> SaturationValue {
        SaturationValue {
            saturation: self.saturation,
            value: self.value,
        }
    }

    fn is_opaque(&self) -> bool {
        (self.alpha - 1.0).abs() < 0.001
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (h, s, v) = math::rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Self::new(h, s, v)
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let (r, g, b) = math::hsv_to_rgb(self.hue, self.saturation, self.value);
        (math::to_byte(r), math::to_byte(g), math::to_byte(b))
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8-digit hex is interpreted as RRGGBBAA. 3 and 6-digit hex default to full opacity.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let stripped = hex.trim().trim_start_matches('#');
        if stripped.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }
        // All ASCII from here on, so byte slicing is safe.
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16).map_err(|_| ColorParseError::InvalidLength(stripped.len()))
        };
        match stripped.len() {
            3 => Ok(Self::from_rgb(
                byte(0..1)? * 17,
                byte(1..2)? * 17,
                byte(2..3)? * 17,
            )),
            6 => Ok(Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => {
                let alpha = byte(6..8)? as f64 / 255.0;
                Ok(Self::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?).with_alpha(alpha))
            }
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Uppercase hex without `#`: RRGGBB when opaque, RRGGBBAA otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        if self.is_opaque() {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, math::to_byte(self.alpha))
        }
    }

    /// Canonical css string, the form recorded in the used colors list.
    pub fn css(&self) -> String {
        format!("#{}", self.to_hex())
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent.
    pub fn rgb(&self) -> String {
        let (r, g, b) = self.to_rgb();
        if self.is_opaque() {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, math::quantize(self.alpha, 100.0))
        }
    }

    /// The fully saturated, full brightness color at this hue, as css.
    pub fn panel_background(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.hue.round() as i64)
    }

    /// The panel background as 0–255 RGB.
    pub fn hue_rgb(&self) -> (u8, u8, u8) {
        Self::new(self.hue, 1.0, 1.0).to_rgb()
    }
}

impl FromStr for HsvColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_and_rgb() {
        let color = HsvColor::new(120.0, 0.5, 0.75);
        assert_eq!(color.to_rgb(), (96, 191, 96));
        assert_eq!(color.css(), "#60BF60");
        assert_eq!(color.rgb(), "rgb(96, 191, 96)");
        assert_eq!(color.to_string(), "#60BF60");
    }

    #[test]
    fn test_translucent_strings() {
        let color = HsvColor::new(0.0, 1.0, 1.0).with_alpha(0.5);
        assert_eq!(color.css(), "#FF000080");
        assert_eq!(color.rgb(), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_panel_background() {
        let color = HsvColor::new(120.0, 0.2, 0.3);
        assert_eq!(color.panel_background(), "hsl(120, 100%, 50%)");
        assert_eq!(color.hue_rgb(), (0, 255, 0));
    }

    #[test]
    fn test_from_hex() {
        let color: HsvColor = "#FF0000".parse().unwrap();
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.value(), 1.0);

        let short = HsvColor::from_hex("0f0").unwrap();
        assert_eq!(short.to_rgb(), (0, 255, 0));

        let translucent = HsvColor::from_hex("0000FF80").unwrap();
        assert_eq!(translucent.to_hex(), "0000FF80");
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(HsvColor::from_hex(""), Err(ColorParseError::Empty));
        assert_eq!(HsvColor::from_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(
            HsvColor::from_hex("#12345"),
            Err(ColorParseError::InvalidLength(5))
        );
        assert_eq!(
            HsvColor::from_hex("#12G456"),
            Err(ColorParseError::InvalidDigit('G'))
        );
    }

    #[test]
    fn test_with_saturation_value_keeps_hue() {
        let color = HsvColor::new(300.0, 0.1, 0.1).with_alpha(0.25);
        let next = color.with_saturation_value(SaturationValue {
            saturation: 0.0,
            value: 0.0,
        });
        assert_eq!(next.hue(), 300.0);
        assert_eq!(next.alpha(), 0.25);
        assert_eq!(next.saturation_value(), SaturationValue { saturation: 0.0, value: 0.0 });
    }

    #[test]
    fn test_new_wraps_and_clamps() {
        let color = HsvColor::new(-30.0, 1.5, -0.5);
        assert_eq!(color.hue(), 330.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.value(), 0.0);
    }
}
