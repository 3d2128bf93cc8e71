//! A single open panel

use crate::input::DragState;
use crate::math::{Rect, Size, Vec2};
use crate::stack::ZOrder;
use super::{TypeTag, WindowId, WindowRegion};

/// One open floating panel
///
/// Fields are read-only outside the crate: position changes only through
/// [`DragController`](crate::DragController) and z-order only through
/// [`StackOrderArbiter`](crate::StackOrderArbiter).
#[derive(Debug)]
pub struct WindowInstance<P> {
    pub(super) id: WindowId,
    pub(super) type_tag: TypeTag,
    pub(super) payload: P,
    pub(super) position: Vec2,
    pub(super) size: Size,
    /// Panel-local drag area
    pub(super) grab_area: Option<Rect>,
    /// Panel-local close button
    pub(super) close_area: Option<Rect>,
    pub(super) z_order: ZOrder,
    pub(super) drag_state: DragState,
}

impl<P> WindowInstance<P> {
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the instance, keeping only its payload
    pub fn into_payload(self) -> P {
        self.payload
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_state.is_dragging()
    }

    /// Bounding rectangle on the overlay
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Drag area on the overlay, if the panel is draggable
    pub fn grab_rect(&self) -> Option<Rect> {
        self.grab_area.map(|area| area.translate(self.position))
    }

    /// Close button on the overlay, if the panel shows one
    pub fn close_button_rect(&self) -> Option<Rect> {
        self.close_area.map(|area| area.translate(self.position))
    }

    /// Classify a point already known to be inside [`bounds`](Self::bounds)
    pub(crate) fn region_at(&self, at: Vec2) -> WindowRegion {
        if self.close_button_rect().is_some_and(|r| r.contains(at)) {
            return WindowRegion::CloseButton;
        }
        if self.grab_rect().is_some_and(|r| r.contains(at)) {
            return WindowRegion::GrabRegion;
        }
        WindowRegion::Content
    }
}
