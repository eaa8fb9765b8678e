//! Pointer-drag adapter.
//!
//! A [`Draggable`] is bound to a measurable panel element and turns raw
//! pointer down/move/up events into `start`/`drag`/`end` callbacks with
//! panel-relative, clamped coordinates. The host feeds it events; once
//! [`Draggable::destroy`] has run it ignores everything.

use std::rc::Rc;

use crate::geometry::{Coordinate, PanelRect};

/// Something the adapter can measure at drag start.
pub trait PanelElement {
    /// Current rendered size, or `None` before the element is laid out.
    fn measure(&self) -> Option<PanelRect>;
}

impl PanelElement for floem::ViewId {
    fn measure(&self) -> Option<PanelRect> {
        self.get_layout()
            .map(|layout| PanelRect::new(layout.size.width as f64, layout.size.height as f64))
    }
}

/// Callbacks a [`Draggable`] is configured with.
pub trait DragHandler {
    /// A drag began. `rect` is the freshly measured panel size.
    fn start(&mut self, rect: PanelRect);
    fn drag(&mut self, coordinate: Coordinate);
    fn end(&mut self, coordinate: Coordinate);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

pub struct Draggable {
    element: Option<Rc<dyn PanelElement>>,
    state: DragState,
    /// Bounds used for clamping, refreshed at every drag start.
    bounds: PanelRect,
}

impl Draggable {
    /// Attach to `element`. `fallback` is used while it cannot be measured.
    pub fn new(element: Rc<dyn PanelElement>, fallback: PanelRect) -> Self {
        let bounds = element.measure().unwrap_or(fallback);
        tracing::debug!(?bounds, "draggable attached");
        Self {
            element: Some(element),
            state: DragState::Idle,
            bounds,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    /// Panel size as of the last measurement.
    pub fn bounds(&self) -> PanelRect {
        self.bounds
    }

    /// Pointer pressed inside the panel: start a drag and deliver the press
    /// point as the first update. Returns whether the event was consumed.
    pub fn pointer_down(&mut self, pos: Coordinate, handler: &mut impl DragHandler) -> bool {
        let Some(element) = &self.element else {
            return false;
        };
        if self.state == DragState::Dragging {
            return true;
        }
        if let Some(rect) = element.measure() {
            self.bounds = rect;
        }
        self.state = DragState::Dragging;
        tracing::trace!(bounds = ?self.bounds, "drag start");
        handler.start(self.bounds);
        handler.drag(self.bounds.clamp(pos));
        true
    }

    pub fn pointer_move(&mut self, pos: Coordinate, handler: &mut impl DragHandler) -> bool {
        if !self.is_attached() || self.state != DragState::Dragging {
            return false;
        }
        handler.drag(self.bounds.clamp(pos));
        true
    }

    pub fn pointer_up(&mut self, pos: Coordinate, handler: &mut impl DragHandler) -> bool {
        if !self.is_attached() || self.state != DragState::Dragging {
            return false;
        }
        self.state = DragState::Idle;
        let pos = self.bounds.clamp(pos);
        tracing::trace!(?pos, "drag end");
        handler.end(pos);
        true
    }

    /// Abandon the current drag without an `end` callback, e.g. on focus loss.
    pub fn cancel(&mut self) {
        if self.state == DragState::Dragging {
            tracing::trace!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Detach from the element. Returns `false` if already destroyed.
    pub fn destroy(&mut self) -> bool {
        self.state = DragState::Idle;
        if self.element.take().is_some() {
            tracing::debug!("draggable destroyed");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;

    /// Element whose size tests can change between drags. The second field
    /// counts calls to `measure`.
    pub(crate) struct FakeElement(pub Cell<Option<PanelRect>>, pub Cell<usize>);

    impl FakeElement {
        pub(crate) fn sized(width: f64, height: f64) -> Rc<Self> {
            Rc::new(Self(Cell::new(Some(PanelRect::new(width, height))), Cell::new(0)))
        }

        pub(crate) fn unmeasured() -> Rc<Self> {
            Rc::new(Self(Cell::new(None), Cell::new(0)))
        }
    }

    impl PanelElement for FakeElement {
        fn measure(&self) -> Option<PanelRect> {
            self.1.set(self.1.get() + 1);
            self.0.get()
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Start(PanelRect),
        Drag(Coordinate),
        End(Coordinate),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl DragHandler for Recorder {
        fn start(&mut self, rect: PanelRect) {
            self.0.push(Call::Start(rect));
        }
        fn drag(&mut self, coordinate: Coordinate) {
            self.0.push(Call::Drag(coordinate));
        }
        fn end(&mut self, coordinate: Coordinate) {
            self.0.push(Call::End(coordinate));
        }
    }

    #[test]
    fn test_full_drag_sequence() {
        let element = FakeElement::sized(200.0, 100.0);
        let mut drag = Draggable::new(element, PanelRect::default());
        let mut rec = Recorder::default();

        assert!(!drag.pointer_move(Coordinate::new(5.0, 5.0), &mut rec));
        assert!(drag.pointer_down(Coordinate::new(10.0, 20.0), &mut rec));
        assert_eq!(drag.state(), DragState::Dragging);
        assert!(drag.pointer_move(Coordinate::new(50.0, 60.0), &mut rec));
        assert!(drag.pointer_up(Coordinate::new(70.0, 80.0), &mut rec));
        assert_eq!(drag.state(), DragState::Idle);

        assert_eq!(
            rec.0,
            vec![
                Call::Start(PanelRect::new(200.0, 100.0)),
                Call::Drag(Coordinate::new(10.0, 20.0)),
                Call::Drag(Coordinate::new(50.0, 60.0)),
                Call::End(Coordinate::new(70.0, 80.0)),
            ]
        );
    }

    #[test]
    fn test_remeasures_at_start_and_clamps() {
        let element = FakeElement::sized(200.0, 100.0);
        let mut drag = Draggable::new(element.clone(), PanelRect::default());
        let mut rec = Recorder::default();

        element.0.set(Some(PanelRect::new(50.0, 40.0)));
        drag.pointer_down(Coordinate::new(-5.0, 10.0), &mut rec);
        drag.pointer_up(Coordinate::new(90.0, 90.0), &mut rec);

        assert_eq!(
            rec.0,
            vec![
                Call::Start(PanelRect::new(50.0, 40.0)),
                Call::Drag(Coordinate::new(0.0, 10.0)),
                Call::End(Coordinate::new(50.0, 40.0)),
            ]
        );
    }

    #[test]
    fn test_unmeasured_element_uses_fallback() {
        let element = FakeElement::unmeasured();
        let mut drag = Draggable::new(element, PanelRect::new(30.0, 30.0));
        let mut rec = Recorder::default();
        drag.pointer_down(Coordinate::new(100.0, 100.0), &mut rec);
        assert_eq!(rec.0[1], Call::Drag(Coordinate::new(30.0, 30.0)));
    }

    #[test]
    fn test_cancel_skips_end() {
        let mut drag = Draggable::new(FakeElement::sized(10.0, 10.0), PanelRect::default());
        let mut rec = Recorder::default();
        drag.pointer_down(Coordinate::new(1.0, 1.0), &mut rec);
        drag.cancel();
        assert!(!drag.pointer_up(Coordinate::new(2.0, 2.0), &mut rec));
        assert_eq!(rec.0.len(), 2);
    }

    #[test]
    fn test_destroy_detaches_once() {
        let mut drag = Draggable::new(FakeElement::sized(10.0, 10.0), PanelRect::default());
        let mut rec = Recorder::default();
        drag.pointer_down(Coordinate::new(1.0, 1.0), &mut rec);

        assert!(drag.destroy());
        assert!(!drag.destroy());
        assert!(!drag.is_attached());

        assert!(!drag.pointer_down(Coordinate::new(1.0, 1.0), &mut rec));
        assert!(!drag.pointer_move(Coordinate::new(2.0, 2.0), &mut rec));
        assert!(!drag.pointer_up(Coordinate::new(3.0, 3.0), &mut rec));
        assert_eq!(rec.0.len(), 2);
    }
}
