//! Paint list for the overlay

use serde::Serialize;
use crate::math::{Rect, Vec2};
use crate::stack::ZOrder;
use crate::window::{TypeTag, WindowId, WindowInstance, WindowRegion};
use super::Compositor;

/// One panel box as the overlay should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowFrame {
    pub id: WindowId,
    pub type_tag: TypeTag,
    pub z_order: ZOrder,
    pub bounds: Rect,
    /// Drag area, if the panel is draggable
    pub grab_rect: Option<Rect>,
    pub close_button: Option<Rect>,
    /// Front-most panel
    pub focused: bool,
    pub dragging: bool,
}

impl<P> Compositor<P> {
    /// Panels in paint order (back to front)
    ///
    /// Only these boxes are interactive; the rest of the overlay lets input
    /// through to the application underneath.
    pub fn frame(&self) -> Vec<WindowFrame> {
        let front = self.windows.front();
        self.windows
            .list()
            .into_iter()
            .map(|w| window_to_frame(w, front))
            .collect()
    }

    /// Top-most panel under `at` and the region hit
    pub fn hit_test(&self, at: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows
            .list()
            .into_iter()
            .rev()
            .find(|w| w.bounds().contains(at))
            .map(|w| (w.id(), w.region_at(at)))
    }

    /// Whether the overlay should take input at `at`
    pub fn is_interactive_at(&self, at: Vec2) -> bool {
        self.hit_test(at).is_some()
    }
}

fn window_to_frame<P>(w: &WindowInstance<P>, front: Option<WindowId>) -> WindowFrame {
    WindowFrame {
        id: w.id(),
        type_tag: w.type_tag().clone(),
        z_order: w.z_order(),
        bounds: w.bounds(),
        grab_rect: w.grab_rect(),
        close_button: w.close_button_rect(),
        focused: front == Some(w.id()),
        dragging: w.is_dragging(),
    }
}
