//! Swatch row for the used colors list, plus small icon buttons.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::HsvColor;
use crate::constants;
use crate::math;
use crate::used_colors::UsedColors;

/// Recently used colors, most recent first. Clicking a swatch selects it.
pub(crate) fn used_colors_row(
    used_colors: RwSignal<UsedColors>,
    color: RwSignal<HsvColor>,
) -> impl IntoView {
    h_stack((
        dyn_stack(
            move || used_colors.get().colors().to_vec(),
            |css| css.clone(),
            move |css| swatch(css, color),
        )
        .style(|s| {
            s.flex_row()
                .flex_wrap(floem::taffy::style::FlexWrap::Wrap)
                .gap(4.0)
                .flex_grow(1.0)
        }),
        icon_button(lucide_icons::Icon::Trash2, move || {
            used_colors.update(UsedColors::clear);
        }),
    ))
    .style(|s| s.items_start().gap(constants::GAP))
}

fn swatch(css: String, color: RwSignal<HsvColor>) -> impl IntoView {
    let parsed = HsvColor::from_hex(&css);
    let fill = match &parsed {
        Ok(c) => {
            let (r, g, b) = c.to_rgb();
            Color::rgba8(r, g, b, math::to_byte(c.alpha()))
        }
        Err(_) => Color::TRANSPARENT,
    };
    empty()
        .style(move |s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(fill)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_click_stop(move |_| match &parsed {
            Ok(picked) => color.set(*picked),
            Err(err) => tracing::warn!(%err, css = %css, "ignoring unparsable used color"),
        })
}

/// A small lucide icon button that runs `on_press` on release.
pub(crate) fn icon_button(
    icon: lucide_icons::Icon,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(move || icon.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// Copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    icon_button(lucide_icons::Icon::Copy, move || copy_to_clipboard(&get_text()))
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => tracing::debug!(text, "copied to clipboard"),
        Err(err) => tracing::warn!(%err, "clipboard unavailable"),
    }
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_clipboard(text: &str) {
    tracing::debug!(text, "clipboard support disabled, not copying");
}
