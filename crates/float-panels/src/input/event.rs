//! Raw pointer events as delivered by the host

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Identifies one pointing device (mouse, pen, or a single touch contact)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The mouse, or the only pointer on single-pointer hosts
    pub const PRIMARY: PointerId = PointerId(0);
}

/// Pointer button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value
    pub fn from_dom(button: u8) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }

    #[inline]
    pub fn is_primary(self) -> bool {
        self == PointerButton::Primary
    }
}

/// What happened to the pointer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEventKind {
    Down { button: PointerButton },
    Move,
    Up { button: PointerButton },
    /// The host cancelled the pointer (touch interrupted, device removed)
    Cancel,
    /// The application lost pointer capture entirely (pointer left the window, focus loss)
    CaptureLost,
}

/// One pointer event in overlay coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub position: Vec2,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub fn down(pointer: PointerId, position: Vec2, button: PointerButton) -> Self {
        Self { pointer, position, kind: PointerEventKind::Down { button } }
    }

    pub fn moved(pointer: PointerId, position: Vec2) -> Self {
        Self { pointer, position, kind: PointerEventKind::Move }
    }

    pub fn up(pointer: PointerId, position: Vec2, button: PointerButton) -> Self {
        Self { pointer, position, kind: PointerEventKind::Up { button } }
    }

    pub fn cancel(pointer: PointerId) -> Self {
        Self { pointer, position: Vec2::ZERO, kind: PointerEventKind::Cancel }
    }

    pub fn capture_lost() -> Self {
        Self { pointer: PointerId::PRIMARY, position: Vec2::ZERO, kind: PointerEventKind::CaptureLost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_button_mapping() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Middle);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
        assert!(PointerButton::from_dom(0).is_primary());
        assert!(!PointerButton::from_dom(2).is_primary());
    }

    #[test]
    fn test_event_deserializes_from_host_json() {
        let json = r#"{"pointer":3,"position":{"x":12.0,"y":4.5},"kind":{"type":"down","button":"primary"}}"#;
        let event: PointerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, PointerEvent::down(PointerId(3), Vec2::new(12.0, 4.5), PointerButton::Primary));
    }
}
