//! Input routing result

use serde::Serialize;
use crate::window::WindowId;

/// What the host should do with a pointer event
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Consumed by the panel manager
    Handled,
    /// Not over any panel; let it fall through to the application below
    Unhandled,
    /// Belongs to a panel's content
    Forward {
        /// Target panel
        window_id: WindowId,
        /// X coordinate in panel-local space
        local_x: f32,
        /// Y coordinate in panel-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if the overlay consumed the event
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
