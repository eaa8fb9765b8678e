//! Sizing, color, and styling constants for the panel.

/// Panel width used until the first layout measurement arrives.
pub const DEFAULT_PANEL_WIDTH: f64 = 230.0;

/// Panel height used until the first layout measurement arrives.
pub const DEFAULT_PANEL_HEIGHT: f64 = 168.0;

/// Thumb circle radius on the panel
pub const THUMB_RADIUS: f64 = 7.0;

/// Maximum number of entries kept in the used colors list
pub const USED_COLORS_CAPACITY: usize = 16;

/// Mapping precision: values are quantized to 1 / STEPS
pub const STEPS: f64 = 100.0;

/// Border radius for the panel and swatches
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Used color swatch side length
pub const SWATCH_SIZE: f32 = 18.0;

/// Label font size
pub const LABEL_FONT: f32 = 11.0;
