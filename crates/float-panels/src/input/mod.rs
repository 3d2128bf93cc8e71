//! Pointer input: events, drag sessions and routing results
//!
//! [`DragController`] is the one drag implementation shared by every panel.
//! It is parameterized only by each panel's grab region and the
//! [`ClampPolicy`], and it holds a [`CaptureGuard`] for every live session so
//! pointer capture is released on every exit path.

mod event;
mod drag;
mod clamp;
mod capture;
mod controller;
mod result;

pub use event::{PointerButton, PointerEvent, PointerEventKind, PointerId};
pub use drag::DragState;
pub use clamp::ClampPolicy;
pub use capture::{CaptureBackend, CaptureGuard, NoCapture};
pub use controller::DragController;
pub use result::InputResult;
