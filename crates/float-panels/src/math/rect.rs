//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle, half-open on the right and bottom edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Move by an offset, keeping the size
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Part of `self` that also lies inside `outer`; zero-sized when disjoint
    pub fn clip_to(&self, outer: &Rect) -> Rect {
        let x = self.x.max(outer.x);
        let y = self.y.max(outer.y);
        let right = self.right().min(outer.right());
        let bottom = self.bottom().min(outer.bottom());
        Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(110.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 70.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
    }

    #[test]
    fn test_rect_translate() {
        let r = Rect::new(0.0, 0.0, 30.0, 10.0).translate(Vec2::new(100.0, 200.0));
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 200.0).abs() < 0.001);
        assert!((r.width - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_clip_to() {
        let header = Rect::new(0.0, 0.0, 400.0, 40.0);
        let window = Rect::new(0.0, 0.0, 200.0, 300.0);
        let clipped = header.clip_to(&window);
        assert!((clipped.width - 200.0).abs() < 0.001);
        assert!((clipped.height - 40.0).abs() < 0.001);

        let far = Rect::new(500.0, 500.0, 10.0, 10.0).clip_to(&window);
        assert!(far.width.abs() < 0.001);
        assert!(far.height.abs() < 0.001);
    }
}
