//! Saturation/value panel logic, independent of the view that renders it.
//!
//! The panel owns its [`Draggable`]. Drag updates are mapped to a
//! [`SaturationValue`] and reported through `on_change`; the color itself
//! belongs to the caller. When a drag ends the panel waits one tick, then
//! records the caller's color (by then updated) in the used colors list.

use std::rc::Rc;

use crate::color::HsvColor;
use crate::config::PanelConfig;
use crate::draggable::{DragHandler, DragState, Draggable, PanelElement};
use crate::geometry::{self, Coordinate, PanelRect, SaturationValue, ThumbPosition};
use crate::tick::Tick;
use crate::used_colors::ColorHistory;

/// State the drag callbacks act on.
struct PanelState {
    rect: PanelRect,
    disabled: bool,
    color: Rc<dyn Fn() -> HsvColor>,
    on_change: Rc<dyn Fn(SaturationValue)>,
    history: Rc<dyn ColorHistory>,
    tick: Rc<dyn Tick>,
}

impl DragHandler for PanelState {
    fn start(&mut self, rect: PanelRect) {
        self.rect = rect;
    }

    fn drag(&mut self, coordinate: Coordinate) {
        if self.disabled {
            return;
        }
        let sv = geometry::saturation_value_at(coordinate, self.rect);
        (self.on_change)(sv);
    }

    fn end(&mut self, coordinate: Coordinate) {
        if self.disabled {
            return;
        }
        self.drag(coordinate);
        let color = self.color.clone();
        let history = self.history.clone();
        self.tick.next_tick(Box::new(move || history.add_color(color().css())));
    }
}

pub struct SaturationPanel {
    state: PanelState,
    draggable: Option<Draggable>,
    config: PanelConfig,
}

impl SaturationPanel {
    /// `color` reads the caller's current color; it is never written here.
    pub fn new(
        color: impl Fn() -> HsvColor + 'static,
        history: Rc<dyn ColorHistory>,
        tick: Rc<dyn Tick>,
    ) -> Self {
        let config = PanelConfig::default();
        Self {
            state: PanelState {
                rect: config.default_rect(),
                disabled: false,
                color: Rc::new(color),
                on_change: Rc::new(|_| {}),
                history,
                tick,
            },
            draggable: None,
            config,
        }
    }

    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(SaturationValue) + 'static) -> Self {
        self.set_on_change(on_change);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn set_on_change(&mut self, on_change: impl Fn(SaturationValue) + 'static) {
        self.state.on_change = Rc::new(on_change);
    }

    /// Before attach this also resets the assumed panel size.
    pub fn set_config(&mut self, config: PanelConfig) {
        if !self.is_attached() {
            self.state.rect = config.default_rect();
        }
        self.config = config;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Bind to the rendered panel element and measure it.
    pub fn attach(&mut self, element: Rc<dyn PanelElement>) {
        if let Some(mut previous) = self.draggable.take() {
            tracing::warn!("saturation panel attached twice, dropping previous binding");
            previous.destroy();
        }
        let draggable = Draggable::new(element, self.config.default_rect());
        self.state.rect = draggable.bounds();
        self.draggable = Some(draggable);
    }

    /// Release the drag adapter. Pointer events are ignored afterwards.
    pub fn detach(&mut self) -> bool {
        match self.draggable.take() {
            Some(mut draggable) => draggable.destroy(),
            None => {
                tracing::warn!("saturation panel detached while not attached");
                false
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.draggable.is_some()
    }

    pub fn drag_state(&self) -> DragState {
        self.draggable
            .as_ref()
            .map_or(DragState::Idle, Draggable::state)
    }

    /// Last measured panel size.
    pub fn rect(&self) -> PanelRect {
        self.state.rect
    }

    /// Record a new layout measurement.
    pub fn resize(&mut self, rect: PanelRect) {
        self.state.rect = rect;
    }

    pub fn pointer_down(&mut self, pos: Coordinate) -> bool {
        match &mut self.draggable {
            Some(draggable) => draggable.pointer_down(pos, &mut self.state),
            None => false,
        }
    }

    pub fn pointer_move(&mut self, pos: Coordinate) -> bool {
        match &mut self.draggable {
            Some(draggable) => draggable.pointer_move(pos, &mut self.state),
            None => false,
        }
    }

    pub fn pointer_up(&mut self, pos: Coordinate) -> bool {
        match &mut self.draggable {
            Some(draggable) => draggable.pointer_up(pos, &mut self.state),
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        if let Some(draggable) = &mut self.draggable {
            draggable.cancel();
        }
    }

    pub fn color(&self) -> HsvColor {
        (self.state.color)()
    }

    /// Thumb offset for the caller's current color.
    pub fn thumb_position(&self) -> ThumbPosition {
        geometry::thumb_position(self.color().saturation_value(), self.state.rect)
    }

    /// Css background of the panel: the pure hue.
    pub fn background(&self) -> String {
        self.color().panel_background()
    }
}

impl Drop for SaturationPanel {
    fn drop(&mut self) {
        if let Some(mut draggable) = self.draggable.take() {
            draggable.destroy();
        }
    }
}
