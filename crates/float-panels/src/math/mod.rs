//! Overlay geometry
//!
//! All coordinates are overlay (screen) pixels with the origin at the
//! top-left corner and y growing downwards.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
