//! Parameters for opening a panel

use serde::{Deserialize, Serialize};
use crate::config::FrameStyle;
use crate::math::{Rect, Size, Vec2};
use super::TypeTag;

/// The part of a panel that starts a drag when pressed
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GrabRegion {
    /// The header strip, `FrameStyle::header_height` tall
    #[default]
    Header,
    /// A custom area in panel-local coordinates
    Area(Rect),
    /// The whole panel
    Whole,
    /// Not draggable
    None,
}

impl GrabRegion {
    /// Resolve to a panel-local rectangle clipped to the panel
    pub(crate) fn resolve(self, size: Size, frame: &FrameStyle) -> Option<Rect> {
        let panel = Rect::new(0.0, 0.0, size.width, size.height);
        let area = match self {
            GrabRegion::Header => Rect::new(0.0, 0.0, size.width, frame.header_height),
            GrabRegion::Area(area) => area,
            GrabRegion::Whole => panel,
            GrabRegion::None => return None,
        };
        let clipped = area.clip_to(&panel);
        if clipped.width > 0.0 && clipped.height > 0.0 {
            Some(clipped)
        } else {
            None
        }
    }
}

/// Everything needed to open one panel
///
/// Only the type tag and payload are required; the rest falls back to the
/// registry's [`PanelConfig`](crate::PanelConfig).
#[derive(Clone, Debug)]
pub struct OpenRequest<P> {
    pub type_tag: TypeTag,
    pub payload: P,
    /// Initial top-left corner (None = configured default with cascade)
    pub position: Option<Vec2>,
    /// Panel size (None = configured default)
    pub size: Option<Size>,
    pub grab_region: GrabRegion,
    /// Whether the header shows a close button
    pub closable: bool,
}

impl<P> OpenRequest<P> {
    pub fn new(type_tag: impl Into<TypeTag>, payload: P) -> Self {
        Self {
            type_tag: type_tag.into(),
            payload,
            position: None,
            size: None,
            grab_region: GrabRegion::Header,
            closable: true,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_grab_region(mut self, grab_region: GrabRegion) -> Self {
        self.grab_region = grab_region;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}
