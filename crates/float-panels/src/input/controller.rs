//! Drag session state machine
//!
//! ```text
//!           begin (primary press in grab region)
//!   Idle ──────────────────────────────────────────▶ Dragging
//!    ▲                                                 │  drag_to: position = clamp(pointer - offset)
//!    └─────── end / cancel_pointer / cancel_window ────┘
//!             cancel_all / controller dropped
//! ```
//!
//! Each pointer owns at most one session and each panel is owned by at most
//! one session.

use std::collections::HashMap;
use std::rc::Rc;
use crate::math::Vec2;
use crate::stack::StackOrderArbiter;
use crate::window::{WindowId, WindowInstance, WindowRegistry};
use super::{CaptureBackend, CaptureGuard, ClampPolicy, DragState, NoCapture, PointerId};

#[derive(Debug)]
struct DragSession {
    window_id: WindowId,
    offset: Vec2,
    // Released when the session is dropped.
    _capture: CaptureGuard,
}

/// Translates pointer streams into panel positions
pub struct DragController {
    sessions: HashMap<PointerId, DragSession>,
    capture: Rc<dyn CaptureBackend>,
    clamp: ClampPolicy,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(ClampPolicy::default())
    }
}

impl DragController {
    /// Create a controller without platform capture
    pub fn new(clamp: ClampPolicy) -> Self {
        Self::with_capture(clamp, Rc::new(NoCapture))
    }

    /// Create a controller that acquires capture through `capture`
    pub fn with_capture(clamp: ClampPolicy, capture: Rc<dyn CaptureBackend>) -> Self {
        Self {
            sessions: HashMap::new(),
            capture,
            clamp,
        }
    }

    /// Check if any pointer is dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Panel dragged by `pointer`, if any
    pub fn dragged_window(&self, pointer: PointerId) -> Option<WindowId> {
        self.sessions.get(&pointer).map(|s| s.window_id)
    }

    /// Pointer that currently owns `id`, if any
    pub fn owner_of(&self, id: WindowId) -> Option<PointerId> {
        self.sessions
            .iter()
            .find(|(_, s)| s.window_id == id)
            .map(|(pointer, _)| *pointer)
    }

    /// Number of live sessions
    #[inline]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Start dragging `id` with `pointer` pressed at `at`.
    ///
    /// Raises the panel first. Returns `false` and leaves everything
    /// untouched when the panel is unknown, `at` is outside its grab region,
    /// or another pointer already owns it.
    pub fn begin<P>(
        &mut self,
        registry: &mut WindowRegistry<P>,
        arbiter: &mut StackOrderArbiter,
        pointer: PointerId,
        id: WindowId,
        at: Vec2,
    ) -> bool {
        let grabbed = match registry.get(id) {
            Some(window) => window.grab_rect().is_some_and(|r| r.contains(at)),
            None => return false,
        };
        if !grabbed {
            return false;
        }

        if let Some(owner) = self.owner_of(id) {
            if owner != pointer {
                log::warn!("panel {} already dragged by pointer {:?}, ignoring {:?}", id, owner, pointer);
                return false;
            }
        }

        // A pointer can only drive one session; a missed release leaves a stale one.
        self.end(registry, pointer);

        arbiter.bring_to_front(registry, id);

        let position = match registry.get(id) {
            Some(window) => window.position(),
            None => return false,
        };
        let offset = at - position;
        registry.set_drag_state(id, DragState::Dragging { pointer, offset });

        let capture = CaptureGuard::acquire(Rc::clone(&self.capture), pointer, id);
        self.sessions.insert(
            pointer,
            DragSession {
                window_id: id,
                offset,
                _capture: capture,
            },
        );

        log::debug!("drag start panel {} pointer {:?} offset ({}, {})", id, pointer, offset.x, offset.y);
        true
    }

    /// Follow `pointer` to `at`; returns the panel's new position
    pub fn drag_to<P>(&mut self, registry: &mut WindowRegistry<P>, pointer: PointerId, at: Vec2) -> Option<Vec2> {
        let (window_id, offset) = match self.sessions.get(&pointer) {
            Some(session) => (session.window_id, session.offset),
            None => return None,
        };

        if !registry.contains(window_id) {
            // Panel is gone; drop the session and its capture.
            self.sessions.remove(&pointer);
            return None;
        }

        let position = self.clamp.apply(at - offset);
        registry.set_position(window_id, position);
        log::trace!("drag panel {} to ({}, {})", window_id, position.x, position.y);
        Some(position)
    }

    /// Finish the session of `pointer` (button released)
    pub fn end<P>(&mut self, registry: &mut WindowRegistry<P>, pointer: PointerId) -> Option<WindowId> {
        let session = self.sessions.remove(&pointer)?;
        registry.set_drag_state(session.window_id, DragState::Idle);
        log::debug!("drag end panel {} pointer {:?}", session.window_id, pointer);
        Some(session.window_id)
    }

    /// Abort the session of `pointer`, if any
    pub fn cancel_pointer<P>(&mut self, registry: &mut WindowRegistry<P>, pointer: PointerId) -> Option<WindowId> {
        let cancelled = self.end(registry, pointer);
        if let Some(id) = cancelled {
            log::debug!("drag cancelled for panel {}", id);
        }
        cancelled
    }

    /// Abort whichever session owns `id`, if any
    pub fn cancel_window<P>(&mut self, registry: &mut WindowRegistry<P>, id: WindowId) -> bool {
        match self.owner_of(id) {
            Some(pointer) => self.cancel_pointer(registry, pointer).is_some(),
            None => false,
        }
    }

    /// Close panel `id`, ending the session that owns it first
    ///
    /// The session's capture is released before the panel leaves the
    /// registry. Unknown ids are a no-op.
    pub fn close_window<P>(&mut self, registry: &mut WindowRegistry<P>, id: WindowId) -> Option<WindowInstance<P>> {
        self.cancel_window(registry, id);
        registry.close(id)
    }

    /// Abort every session (input capture lost)
    pub fn cancel_all<P>(&mut self, registry: &mut WindowRegistry<P>) -> usize {
        let pointers: Vec<PointerId> = self.sessions.keys().copied().collect();
        let count = pointers.len();
        for pointer in pointers {
            self.cancel_pointer(registry, pointer);
        }
        count
    }
}
