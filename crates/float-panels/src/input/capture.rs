//! Exclusive pointer ownership for drag sessions
//!
//! Hosts plug their native capture API (DOM `setPointerCapture`, an OS
//! mouse grab, a global listener) in through [`CaptureBackend`]. The drag
//! controller only ever holds capture through a [`CaptureGuard`], which
//! releases in `Drop`. Ending, cancelling or discarding a session therefore
//! releases capture exactly once, including when a panel is closed mid-drag
//! or the whole compositor is dropped.

use std::fmt;
use std::rc::Rc;
use crate::window::WindowId;
use super::PointerId;

/// Platform pointer-capture hooks
pub trait CaptureBackend {
    /// Route all further events of `pointer` to the overlay for `window`
    fn acquire(&self, pointer: PointerId, window: WindowId);
    /// Undo a previous [`acquire`](Self::acquire)
    fn release(&self, pointer: PointerId, window: WindowId);
}

/// Backend for hosts without a capture API; the controller still tracks
/// ownership itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl CaptureBackend for NoCapture {
    fn acquire(&self, _pointer: PointerId, _window: WindowId) {}
    fn release(&self, _pointer: PointerId, _window: WindowId) {}
}

/// Held capture; released when dropped
pub struct CaptureGuard {
    backend: Rc<dyn CaptureBackend>,
    pointer: PointerId,
    window: WindowId,
}

impl CaptureGuard {
    /// Acquire capture of `pointer` on behalf of `window`
    pub fn acquire(backend: Rc<dyn CaptureBackend>, pointer: PointerId, window: WindowId) -> Self {
        backend.acquire(pointer, window);
        Self { backend, pointer, window }
    }

    #[inline]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    #[inline]
    pub fn window(&self) -> WindowId {
        self.window
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.backend.release(self.pointer, self.window);
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("pointer", &self.pointer)
            .field("window", &self.window)
            .finish()
    }
}
