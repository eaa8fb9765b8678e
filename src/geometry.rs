//! Pixel ↔ saturation/value mapping for the panel.
//!
//! Horizontal position selects saturation (left = 0, right = 1), vertical
//! position selects value (top = 1, bottom = 0). Results are quantized to
//! 1% steps.

use crate::constants;
use crate::math;

/// Measured size of the rendered panel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub width: f64,
    pub height: f64,
}

impl Default for PanelRect {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_PANEL_WIDTH,
            height: constants::DEFAULT_PANEL_HEIGHT,
        }
    }
}

impl PanelRect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height with a floor of one pixel, safe to divide by.
    fn divisors(&self) -> (f64, f64) {
        (self.width.max(1.0), self.height.max(1.0))
    }

    /// Clamp `coordinate` into the panel.
    pub fn clamp(&self, coordinate: Coordinate) -> Coordinate {
        Coordinate {
            x: coordinate.x.clamp(0.0, self.width.max(0.0)),
            y: coordinate.y.clamp(0.0, self.height.max(0.0)),
        }
    }
}

/// Pixel offset from the panel's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<floem::kurbo::Point> for Coordinate {
    fn from(point: floem::kurbo::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Normalized saturation/value pair, both in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SaturationValue {
    pub saturation: f64,
    pub value: f64,
}

/// Thumb offset from the panel's top-left corner, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThumbPosition {
    pub left: i64,
    pub top: i64,
}

/// Map a pointer coordinate to the saturation/value it selects.
///
/// Coordinates outside the panel are clamped to its edges.
pub fn saturation_value_at(coordinate: Coordinate, rect: PanelRect) -> SaturationValue {
    let (width, height) = rect.divisors();
    let Coordinate { x, y } = rect.clamp(coordinate);
    SaturationValue {
        saturation: math::quantize(x / width, constants::STEPS),
        value: math::quantize(1.0 - y / height, constants::STEPS),
    }
}

/// Where the thumb sits for `sv`. Inverse of [`saturation_value_at`].
pub fn thumb_position(sv: SaturationValue, rect: PanelRect) -> ThumbPosition {
    ThumbPosition {
        left: (sv.saturation * rect.width).round() as i64,
        top: ((1.0 - sv.value) * rect.height).round() as i64,
    }
}
