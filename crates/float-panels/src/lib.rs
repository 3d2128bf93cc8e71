//! Floating panel manager
//!
//! This crate keeps any number of independent, draggable panels open on a
//! single overlay above a host application:
//! - Panel lifecycle (open, close) with never-reused ids
//! - Strict stacking order with bring-to-front
//! - One drag state machine shared by every panel, with RAII pointer capture
//! - Hit testing that lets input fall through where no panel is
//!
//! ## Architecture
//!
//! - [`math`]: geometry (`Vec2`, `Size`, `Rect`)
//! - [`stack`]: the z-order arbiter
//! - [`window`]: panel instances and the registry
//! - [`input`]: pointer events, drag controller, capture guards
//! - [`compositor`]: paint list and input routing over the other three
//! - [`content`]: type tag to renderer lookup for the content layer
//! - [`config`]: configuration and its errors
//!
//! ## Example
//!
//! ```rust
//! use float_panels::{Compositor, InputResult, PointerButton, PointerId, Vec2};
//!
//! let mut panels: Compositor<&str> = Compositor::default();
//! let id = panels.open_at("customer-form", "payload", Vec2::new(100.0, 100.0));
//!
//! // Press on the header, drag, release
//! let mouse = PointerId::PRIMARY;
//! panels.handle_pointer_down(mouse, Vec2::new(120.0, 110.0), PointerButton::Primary);
//! panels.handle_pointer_move(mouse, Vec2::new(300.0, 5.0));
//! panels.handle_pointer_up(mouse, Vec2::new(300.0, 5.0), PointerButton::Primary);
//!
//! assert_eq!(panels.get(id).unwrap().position(), Vec2::new(280.0, 0.0));
//!
//! // Nothing here: the click belongs to the application underneath
//! let result = panels.handle_pointer_down(mouse, Vec2::new(5.0, 900.0), PointerButton::Primary);
//! assert_eq!(result, InputResult::Unhandled);
//! ```
//!
//! The core is single-threaded and synchronous. Every operation is total:
//! unknown ids degrade to no-ops.

pub mod math;
pub mod stack;
pub mod window;
pub mod input;
pub mod compositor;
pub mod content;
pub mod config;

pub use math::{Rect, Size, Vec2};
pub use stack::{StackOrderArbiter, ZOrder};
pub use window::{GrabRegion, OpenRequest, TypeTag, WindowId, WindowInstance, WindowRegion, WindowRegistry};
pub use input::{
    CaptureBackend, CaptureGuard, ClampPolicy, DragController, DragState, InputResult, NoCapture,
    PointerButton, PointerEvent, PointerEventKind, PointerId,
};
pub use compositor::{Compositor, WindowFrame};
pub use content::ContentTable;
pub use config::{ConfigError, FrameStyle, PanelConfig};
