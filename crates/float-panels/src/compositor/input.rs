//! Pointer routing
//!
//! A pointer with a live drag session owns its move and release events; they
//! never reach other panels. Everything else is hit-tested against the
//! panels from front to back, and points outside every panel fall through.

use crate::input::{InputResult, PointerButton, PointerEvent, PointerEventKind, PointerId};
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::Compositor;

impl<P> Compositor<P> {
    /// Dispatch one pointer event
    pub fn handle(&mut self, event: PointerEvent) -> InputResult {
        match event.kind {
            PointerEventKind::Down { button } => self.handle_pointer_down(event.pointer, event.position, button),
            PointerEventKind::Move => self.handle_pointer_move(event.pointer, event.position),
            PointerEventKind::Up { button } => self.handle_pointer_up(event.pointer, event.position, button),
            PointerEventKind::Cancel => self.handle_pointer_cancel(event.pointer),
            PointerEventKind::CaptureLost => self.handle_capture_lost(),
        }
    }

    /// Handle pointer down
    pub fn handle_pointer_down(&mut self, pointer: PointerId, at: Vec2, button: PointerButton) -> InputResult {
        let (window_id, region) = match self.hit_test(at) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        // Any press inside a panel raises it.
        self.bring_to_front(window_id);

        match region {
            WindowRegion::CloseButton => {
                if button.is_primary() {
                    self.close(window_id);
                }
                InputResult::Handled
            }
            WindowRegion::GrabRegion => {
                if button.is_primary() {
                    self.drag.begin(&mut self.windows, &mut self.arbiter, pointer, window_id, at);
                }
                InputResult::Handled
            }
            WindowRegion::Content => self.forward(window_id, at),
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, pointer: PointerId, at: Vec2) -> InputResult {
        if self.drag.dragged_window(pointer).is_some() {
            self.drag.drag_to(&mut self.windows, pointer, at);
            return InputResult::Handled;
        }
        self.route_passive(at)
    }

    /// Handle pointer up
    pub fn handle_pointer_up(&mut self, pointer: PointerId, at: Vec2, button: PointerButton) -> InputResult {
        if self.drag.dragged_window(pointer).is_some() {
            if button.is_primary() {
                self.drag.end(&mut self.windows, pointer);
            }
            return InputResult::Handled;
        }
        self.route_passive(at)
    }

    /// The host cancelled `pointer`
    pub fn handle_pointer_cancel(&mut self, pointer: PointerId) -> InputResult {
        match self.drag.cancel_pointer(&mut self.windows, pointer) {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// The application lost pointer input; end every drag
    pub fn handle_capture_lost(&mut self) -> InputResult {
        if self.drag.cancel_all(&mut self.windows) > 0 {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Route an event that is not part of a drag
    fn route_passive(&self, at: Vec2) -> InputResult {
        match self.hit_test(at) {
            Some((window_id, WindowRegion::Content)) => self.forward(window_id, at),
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    fn forward(&self, window_id: WindowId, at: Vec2) -> InputResult {
        let window = match self.windows.get(window_id) {
            Some(w) => w,
            None => return InputResult::Unhandled,
        };
        let local = at - window.position();
        InputResult::Forward {
            window_id,
            local_x: local.x,
            local_y: local.y,
        }
    }
}
