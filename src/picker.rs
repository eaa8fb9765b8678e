//! Composed picker: saturation/value panel, current color preview with its
//! css and rgb strings, and the used colors row.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::HsvColor;
use crate::constants;
use crate::math;
use crate::panel_view::saturation_panel;
use crate::used_colors::UsedColors;
use crate::used_colors_view::{copy_button, used_colors_row};

pub(crate) fn picker(color: RwSignal<HsvColor>, used_colors: RwSignal<UsedColors>) -> impl IntoView {
    v_stack((
        saturation_panel(color, used_colors),
        h_stack((
            empty().style(move |st| {
                let c = color.get();
                let (r, g, b) = c.to_rgb();
                st.width(32.0)
                    .height(32.0)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgba8(r, g, b, math::to_byte(c.alpha())))
            }),
            v_stack((
                label(move || color.get().css()),
                label(move || color.get().rgb()),
            ))
            .style(|st| {
                st.font_size(constants::LABEL_FONT)
                    .font_family("monospace".to_string())
                    .color(Color::rgb8(80, 80, 80))
                    .flex_grow(1.0)
            }),
            copy_button(move || color.get_untracked().css()),
        ))
        .style(|st| st.items_center().gap(constants::GAP)),
        used_colors_row(used_colors, color),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
