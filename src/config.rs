//! Host-tunable panel settings.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::geometry::PanelRect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Size assumed before the panel has been laid out.
    pub default_width: f64,
    pub default_height: f64,
    pub thumb_radius: f64,
    pub used_colors_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_width: constants::DEFAULT_PANEL_WIDTH,
            default_height: constants::DEFAULT_PANEL_HEIGHT,
            thumb_radius: constants::THUMB_RADIUS,
            used_colors_capacity: constants::USED_COLORS_CAPACITY,
        }
    }
}

impl PanelConfig {
    pub fn default_rect(&self) -> PanelRect {
        PanelRect::new(self.default_width, self.default_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.default_rect(), PanelRect::new(230.0, 168.0));
        assert_eq!(config.used_colors_capacity, 16);
    }

    #[test]
    fn test_partial_json() {
        let config: PanelConfig =
            serde_json::from_str(r#"{ "default_width": 300.0, "used_colors_capacity": 4 }"#)
                .unwrap();
        assert_eq!(config.default_width, 300.0);
        assert_eq!(config.default_height, constants::DEFAULT_PANEL_HEIGHT);
        assert_eq!(config.thumb_radius, constants::THUMB_RADIUS);
        assert_eq!(config.used_colors_capacity, 4);
    }
}
