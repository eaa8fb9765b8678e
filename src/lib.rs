//! # floem-saturation
//!
//! A saturation/value color panel for [Floem](https://github.com/lapce/floem).
//!
//! Dragging across the panel selects saturation (horizontal) and value
//! (vertical) at the color's current hue. Finished drags are recorded in a
//! shared list of recently used colors.
//!
//! The drag and mapping logic lives in [`SaturationPanel`], which has no
//! dependency on a running window; [`saturation_panel`] is its Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_saturation::{saturation_picker, HsvColor, UsedColors};
//!
//! let color = RwSignal::new(HsvColor::from_hex("3B82F6").unwrap());
//! let used = RwSignal::new(UsedColors::default());
//! // Use `saturation_picker(color, used)` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod draggable;
mod error;
mod geometry;
mod math;
mod panel_view;
mod picker;
mod saturation_panel;
mod tick;
mod used_colors;
mod used_colors_view;

pub use color::HsvColor;
pub use config::PanelConfig;
pub use draggable::{DragHandler, DragState, Draggable, PanelElement};
pub use error::ColorParseError;
pub use geometry::{
    saturation_value_at, thumb_position, Coordinate, PanelRect, SaturationValue, ThumbPosition,
};
pub use panel_view::{saturation_panel, SaturationPanelView};
pub use saturation_panel::SaturationPanel;
pub use tick::{FloemTick, Tick, TickQueue};
pub use used_colors::{ColorHistory, UsedColors};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the panel together with a color preview and the used colors row.
///
/// The picker reads from and writes to `color`; `used_colors` can be shared
/// with other views that want to show the same history.
pub fn saturation_picker(
    color: RwSignal<HsvColor>,
    used_colors: RwSignal<UsedColors>,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker(color, used_colors)
}
