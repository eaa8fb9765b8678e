//! Floem view for the saturation/value panel.
//!
//! The pure hue is filled as the background; a rasterized shading layer
//! (white towards the left, black towards the bottom) is drawn on top. The
//! shading does not depend on the hue, so it is only rebuilt on resize.

use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::HsvColor;
use crate::config::PanelConfig;
use crate::constants;
use crate::geometry::{PanelRect, SaturationValue};
use crate::saturation_panel::SaturationPanel;
use crate::tick::FloemTick;
use crate::used_colors::UsedColors;

/// Straight-alpha RGBA8 overlay that turns a flat hue fill into the
/// saturation/value field.
fn rasterize_shading(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let v = 1.0 - py as f64 / (height - 1).max(1) as f64;
        for px in 0..width {
            let s = px as f64 / (width - 1).max(1) as f64;
            // hsv = v * ((1 - s) * white + s * hue), as one layer over the hue
            let alpha = 1.0 - v * s;
            let gray = if alpha > 0.0 { v * (1.0 - s) / alpha } else { 0.0 };
            let g = (gray * 255.0 + 0.5) as u8;
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = g;
            buf[offset + 1] = g;
            buf[offset + 2] = g;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }
    buf
}

enum PanelUpdate {
    Color,
    Disabled(bool),
}

pub struct SaturationPanelView {
    id: ViewId,
    panel: SaturationPanel,
    size: floem::taffy::prelude::Size<f32>,
    shading_img: Option<peniko::Image>,
    shading_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a saturation/value panel for `color`.
///
/// Drags write saturation and value back into `color` (hue and alpha are
/// kept). Each finished drag records the resulting css color in
/// `used_colors`.
pub fn saturation_panel(
    color: RwSignal<HsvColor>,
    used_colors: RwSignal<UsedColors>,
) -> SaturationPanelView {
    let id = ViewId::new();

    create_effect(move |_| {
        let _ = color.get();
        id.update_state(PanelUpdate::Color);
    });

    let mut panel = SaturationPanel::new(
        move || color.get_untracked(),
        Rc::new(used_colors),
        Rc::new(FloemTick),
    )
    .on_change(move |sv| {
        color.update(|c| *c = c.with_saturation_value(sv));
    });
    panel.attach(Rc::new(id));

    SaturationPanelView {
        id,
        panel,
        size: Default::default(),
        shading_img: None,
        shading_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.width_full()
            .height(constants::DEFAULT_PANEL_HEIGHT as f32)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl SaturationPanelView {
    /// Ignore drags while `disabled` returns true.
    pub fn disabled(mut self, disabled: impl Fn() -> bool + 'static) -> Self {
        let id = self.id;
        self.panel.set_disabled(disabled());
        create_effect(move |_| {
            let d = disabled();
            id.update_state(PanelUpdate::Disabled(d));
        });
        self
    }

    /// Replace the default handler, which writes into the color signal.
    pub fn on_change(mut self, on_change: impl Fn(SaturationValue) + 'static) -> Self {
        self.panel.set_on_change(on_change);
        self
    }

    /// Also sizes the panel to `config.default_height`.
    pub fn config(mut self, config: PanelConfig) -> Self {
        let height = config.default_height as f32;
        self.panel.set_config(config);
        self.style(move |s| s.height(height))
    }

    fn ensure_shading_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 || self.cached_dims == (pw, ph) {
            return;
        }

        let pixels = rasterize_shading(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.shading_hash = blob.id().to_le_bytes().to_vec();
        self.shading_img = Some(img);
        self.cached_dims = (pw, ph);
        tracing::trace!(width = pw, height = ph, "shading rasterized");
    }
}

impl View for SaturationPanelView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PanelUpdate>() {
            match *update {
                PanelUpdate::Color => {}
                PanelUpdate::Disabled(disabled) => {
                    self.panel.set_disabled(disabled);
                    if disabled {
                        self.panel.cancel();
                    }
                }
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                if self.panel.pointer_down(e.pos.into()) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerMove(e) => {
                if self.panel.pointer_move(e.pos.into()) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                self.panel.pointer_up(e.pos.into());
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.panel.cancel();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        if self.size.width > 0.0 && self.size.height > 0.0 {
            self.panel
                .resize(PanelRect::new(self.size.width as f64, self.size.height as f64));
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let color = self.panel.color();
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);

        let (hr, hg, hb) = color.hue_rgb();
        cx.fill(&rect, Color::rgb8(hr, hg, hb), 0.0);

        let scale = cx.scale();
        self.ensure_shading_image(scale);
        if let Some(ref img) = self.shading_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.shading_hash,
                },
                rect,
            );
        }

        if self.panel.is_disabled() {
            cx.fill(&rect, Color::rgba8(255, 255, 255, 110), 0.0);
        }

        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        // Thumb: filled with the current color, white ring, dark outline
        let thumb = self.panel.thumb_position();
        let center = (thumb.left as f64, thumb.top as f64);
        let radius = self.panel.config().thumb_radius;
        let (r, g, b) = color.to_rgb();
        cx.fill(&Circle::new(center, radius), Color::rgb8(r, g, b), 0.0);
        cx.stroke(
            &Circle::new(center, radius + 1.0),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(&Circle::new(center, radius), Color::WHITE, &Stroke::new(2.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let o = ((y * width + x) * 4) as usize;
        [buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]
    }

    #[test]
    fn test_shading_corners() {
        let buf = rasterize_shading(11, 11);
        // top-left: white, no saturation
        assert_eq!(pixel(&buf, 11, 0, 0), [255, 255, 255, 255]);
        // top-right: pure hue shows through
        assert_eq!(pixel(&buf, 11, 10, 0)[3], 0);
        // bottom row: black
        assert_eq!(pixel(&buf, 11, 0, 10), [0, 0, 0, 255]);
        assert_eq!(pixel(&buf, 11, 10, 10), [0, 0, 0, 255]);
    }

    #[test]
    fn test_shading_composites_to_hsv() {
        let buf = rasterize_shading(11, 11);
        // s = 0.5, v = 0.5 over pure green should give hsv(120, 0.5, 0.5)
        let [gray, _, _, a] = pixel(&buf, 11, 5, 5);
        let alpha = a as f64 / 255.0;
        let red = gray as f64 / 255.0 * alpha;
        let green = gray as f64 / 255.0 * alpha + (1.0 - alpha);
        let expected = HsvColor::new(120.0, 0.5, 0.5).to_rgb();
        assert!(((red * 255.0).round() - expected.0 as f64).abs() <= 1.0);
        assert!(((green * 255.0).round() - expected.1 as f64).abs() <= 1.0);
    }
}
