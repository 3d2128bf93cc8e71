//! Registry of open panels

use std::collections::HashMap;
use crate::config::PanelConfig;
use crate::input::DragState;
use crate::math::{Rect, Vec2};
use crate::stack::{StackOrderArbiter, ZOrder};
use super::{OpenRequest, WindowId, WindowInstance};

/// Owns the live set of panels
///
/// This is the only place panels are inserted or removed. Other components
/// change fields of existing entries through crate-private setters.
#[derive(Debug)]
pub struct WindowRegistry<P> {
    windows: HashMap<WindowId, WindowInstance<P>>,
    next_id: u64,
    config: PanelConfig,
}

impl<P> Default for WindowRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> WindowRegistry<P> {
    /// Create a registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(PanelConfig::default())
    }

    /// Create a registry that places and sizes panels per `config`
    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            windows: HashMap::new(),
            next_id: 1,
            config,
        }
    }

    /// Open a panel. Always succeeds.
    pub fn open(&mut self, arbiter: &mut StackOrderArbiter, request: OpenRequest<P>) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;

        let position = request
            .position
            .unwrap_or_else(|| self.config.cascade_position(id.get() - 1));
        let size = request.size.unwrap_or(self.config.default_size);
        let frame = &self.config.frame;
        let grab_area = request.grab_region.resolve(size, frame);
        let close_area = if request.closable && frame.close_button_size > 0.0 {
            let button = Rect::new(
                size.width - frame.close_button_margin - frame.close_button_size,
                (frame.header_height - frame.close_button_size).max(0.0) / 2.0,
                frame.close_button_size,
                frame.close_button_size,
            );
            // Dropped when it does not fit inside the panel.
            let fits = button.x >= 0.0
                && button.right() <= size.width
                && button.bottom() <= size.height;
            fits.then_some(button)
        } else {
            None
        };

        let z_order = arbiter.allocate(self);

        log::debug!(
            "open panel {} ({}) at ({}, {}) z={}",
            id,
            request.type_tag,
            position.x,
            position.y,
            z_order.get()
        );

        self.windows.insert(
            id,
            WindowInstance {
                id,
                type_tag: request.type_tag,
                payload: request.payload,
                position,
                size,
                grab_area,
                close_area,
                z_order,
                drag_state: DragState::Idle,
            },
        );

        id
    }

    /// Remove a panel, handing back the instance. Unknown ids are a no-op.
    ///
    /// Callers end the panel's drag session first; see
    /// `DragController::close_window`.
    pub(crate) fn close(&mut self, id: WindowId) -> Option<WindowInstance<P>> {
        let removed = self.windows.remove(&id);
        if removed.is_some() {
            log::debug!("close panel {}", id);
        }
        removed
    }

    /// Get a panel by ID
    pub fn get(&self, id: WindowId) -> Option<&WindowInstance<P>> {
        self.windows.get(&id)
    }

    /// Mutable access to a panel's payload for the content collaborator
    pub fn payload_mut(&mut self, id: WindowId) -> Option<&mut P> {
        self.windows.get_mut(&id).map(|w| &mut w.payload)
    }

    /// Snapshot of all panels, back to front
    pub fn list(&self) -> Vec<&WindowInstance<P>> {
        let mut windows: Vec<&WindowInstance<P>> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Panel IDs, back to front
    pub fn ids_by_z(&self) -> Vec<WindowId> {
        self.list().into_iter().map(|w| w.id).collect()
    }

    /// The front-most panel
    pub fn front(&self) -> Option<WindowId> {
        self.windows.values().max_by_key(|w| w.z_order).map(|w| w.id)
    }

    pub(crate) fn front_z_order(&self) -> Option<ZOrder> {
        self.windows.values().map(|w| w.z_order).max()
    }

    #[inline]
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub(crate) fn set_z_order(&mut self, id: WindowId, z_order: ZOrder) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_order = z_order;
        }
    }

    pub(crate) fn set_position(&mut self, id: WindowId, position: Vec2) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = position;
        }
    }

    pub(crate) fn set_drag_state(&mut self, id: WindowId, drag_state: DragState) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.drag_state = drag_state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::window::{GrabRegion, TypeTag};

    fn setup() -> (WindowRegistry<&'static str>, StackOrderArbiter) {
        (WindowRegistry::new(), StackOrderArbiter::new(1000))
    }

    #[test]
    fn test_open_assigns_increasing_ids_and_z_orders() {
        let (mut registry, mut arbiter) = setup();
        let a = registry.open(&mut arbiter, OpenRequest::new("a", "A"));
        let b = registry.open(&mut arbiter, OpenRequest::new("b", "B"));
        let c = registry.open(&mut arbiter, OpenRequest::new("c", "C"));

        assert!(a < b && b < c);
        assert_eq!(registry.get(a).unwrap().z_order(), ZOrder::new(1001));
        assert_eq!(registry.get(b).unwrap().z_order(), ZOrder::new(1002));
        assert_eq!(registry.get(c).unwrap().z_order(), ZOrder::new(1003));
        assert_eq!(registry.front(), Some(c));
    }

    #[test]
    fn test_ids_never_reused_after_close() {
        let (mut registry, mut arbiter) = setup();
        let a = registry.open(&mut arbiter, OpenRequest::new("a", "A"));
        registry.close(a);
        let b = registry.open(&mut arbiter, OpenRequest::new("b", "B"));
        assert_ne!(a, b);
        assert!(registry.get(a).is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let (mut registry, mut arbiter) = setup();
        let a = registry.open(&mut arbiter, OpenRequest::new("a", "A"));
        let b = registry.open(&mut arbiter, OpenRequest::new("b", "B"));

        let closed = registry.close(a).unwrap();
        assert_eq!(*closed.payload(), "A");
        assert!(registry.close(a).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(b));
    }

    #[test]
    fn test_list_is_back_to_front() {
        let (mut registry, mut arbiter) = setup();
        let a = registry.open(&mut arbiter, OpenRequest::new("a", "A"));
        let b = registry.open(&mut arbiter, OpenRequest::new("b", "B"));
        arbiter.bring_to_front(&mut registry, a);

        let ids: Vec<WindowId> = registry.list().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec![b, a]);
        assert_eq!(registry.ids_by_z(), ids);
    }

    #[test]
    fn test_default_placement_cascades() {
        let (mut registry, mut arbiter) = setup();
        let a = registry.open(&mut arbiter, OpenRequest::new("a", "A"));
        let b = registry.open(&mut arbiter, OpenRequest::new("b", "B"));

        let config = PanelConfig::default();
        assert!(registry.get(a).unwrap().position().approx_eq(config.default_position, 0.001));
        let expected = config.default_position.offset_by(config.cascade_offset);
        assert!(registry.get(b).unwrap().position().approx_eq(expected, 0.001));
        assert_eq!(registry.get(b).unwrap().size(), config.default_size);
    }

    #[test]
    fn test_explicit_position_and_size() {
        let (mut registry, mut arbiter) = setup();
        let id = registry.open(
            &mut arbiter,
            OpenRequest::new("a", "A")
                .at(Vec2::new(5.0, 6.0))
                .with_size(Size::new(200.0, 100.0)),
        );
        let w = registry.get(id).unwrap();
        assert_eq!(w.position(), Vec2::new(5.0, 6.0));
        assert_eq!(w.size(), Size::new(200.0, 100.0));
        assert_eq!(w.type_tag(), &TypeTag::from("a"));
        assert!(!w.is_dragging());
    }

    #[test]
    fn test_close_button_sits_in_header_right_corner() {
        let (mut registry, mut arbiter) = setup();
        let id = registry.open(
            &mut arbiter,
            OpenRequest::new("a", "A")
                .at(Vec2::new(0.0, 0.0))
                .with_size(Size::new(400.0, 300.0)),
        );
        let close = registry.get(id).unwrap().close_button_rect().unwrap();
        assert!((close.x - 368.0).abs() < 0.001);
        assert!((close.y - 8.0).abs() < 0.001);
        assert!((close.width - 24.0).abs() < 0.001);
    }

    #[test]
    fn test_close_button_dropped_when_panel_too_small() {
        let (mut registry, mut arbiter) = setup();
        let tiny = registry.open(
            &mut arbiter,
            OpenRequest::new("a", "A").with_size(Size::new(10.0, 10.0)),
        );
        assert!(registry.get(tiny).unwrap().close_button_rect().is_none());

        // Wide enough but shorter than the button
        let short = registry.open(
            &mut arbiter,
            OpenRequest::new("a", "A").with_size(Size::new(400.0, 20.0)),
        );
        assert!(registry.get(short).unwrap().close_button_rect().is_none());

        let fits = registry.open(
            &mut arbiter,
            OpenRequest::new("a", "A").with_size(Size::new(40.0, 40.0)),
        );
        let close = registry.get(fits).unwrap().close_button_rect().unwrap();
        assert!((close.x - 8.0).abs() < 0.001);
        assert!(close.right() <= 40.0);
    }

    #[test]
    fn test_not_closable_and_not_draggable() {
        let (mut registry, mut arbiter) = setup();
        let id = registry.open(
            &mut arbiter,
            OpenRequest::new("banner", "B")
                .closable(false)
                .with_grab_region(GrabRegion::None),
        );
        let w = registry.get(id).unwrap();
        assert!(w.close_button_rect().is_none());
        assert!(w.grab_rect().is_none());
    }

    #[test]
    fn test_payload_mut_passes_through() {
        let (mut registry, mut arbiter) = setup();
        let id = registry.open(&mut arbiter, OpenRequest::new("a", "draft"));
        if let Some(payload) = registry.payload_mut(id) {
            *payload = "submitted";
        }
        assert_eq!(*registry.get(id).unwrap().payload(), "submitted");
        assert!(registry.payload_mut(WindowId::new(99)).is_none());
    }
}
