//! Per-panel drag state

use crate::math::Vec2;
use super::PointerId;

/// Drag state recorded on each panel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// Following a pointer
    Dragging {
        /// Pointer that owns the session
        pointer: PointerId,
        /// Pointer position minus panel position at drag start
        offset: Vec2,
    },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The owning pointer while dragging
    pub fn pointer(&self) -> Option<PointerId> {
        match self {
            DragState::Dragging { pointer, .. } => Some(*pointer),
            DragState::Idle => None,
        }
    }
}
