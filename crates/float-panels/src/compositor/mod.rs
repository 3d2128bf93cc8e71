//! Compositor coordinating all panel components
//!
//! This module is split into focused submodules:
//! - `input`: pointer routing and hit-test delegation
//! - `rendering`: paint list for the overlay

mod input;
mod rendering;

use std::rc::Rc;
use crate::config::{ConfigError, PanelConfig};
use crate::content::ContentTable;
use crate::input::{CaptureBackend, DragController, NoCapture};
use crate::math::Vec2;
use crate::stack::StackOrderArbiter;
use crate::window::{OpenRequest, TypeTag, WindowId, WindowInstance, WindowRegistry};

pub use rendering::WindowFrame;

/// Panel manager entry point
///
/// Owns, per instance:
/// - the stacking arbiter (z-order counter)
/// - the window registry (open panels)
/// - the drag controller (pointer sessions)
///
/// Nothing is global, so any number of compositors can coexist.
pub struct Compositor<P> {
    config: PanelConfig,
    arbiter: StackOrderArbiter,
    windows: WindowRegistry<P>,
    drag: DragController,
}

impl<P> Default for Compositor<P> {
    fn default() -> Self {
        Self::build(PanelConfig::default(), Rc::new(NoCapture))
    }
}

impl<P> Compositor<P> {
    /// Create a compositor without platform pointer capture
    pub fn new(config: PanelConfig) -> Result<Self, ConfigError> {
        Self::with_capture(config, Rc::new(NoCapture))
    }

    /// Create a compositor that captures pointers through `capture` while dragging
    ///
    /// `config` is validated first, the same way `PanelConfig::from_json` does.
    pub fn with_capture(config: PanelConfig, capture: Rc<dyn CaptureBackend>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, capture))
    }

    fn build(config: PanelConfig, capture: Rc<dyn CaptureBackend>) -> Self {
        Self {
            arbiter: StackOrderArbiter::new(config.z_baseline),
            windows: WindowRegistry::with_config(config.clone()),
            drag: DragController::with_capture(config.clamp, capture),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[inline]
    pub fn windows(&self) -> &WindowRegistry<P> {
        &self.windows
    }

    #[inline]
    pub fn arbiter(&self) -> &StackOrderArbiter {
        &self.arbiter
    }

    #[inline]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Open a panel at the default position
    pub fn open(&mut self, type_tag: impl Into<TypeTag>, payload: P) -> WindowId {
        self.open_with(OpenRequest::new(type_tag, payload))
    }

    /// Open a panel with its top-left corner at `position`
    pub fn open_at(&mut self, type_tag: impl Into<TypeTag>, payload: P, position: Vec2) -> WindowId {
        self.open_with(OpenRequest::new(type_tag, payload).at(position))
    }

    /// Open a panel from a full request
    pub fn open_with(&mut self, request: OpenRequest<P>) -> WindowId {
        self.windows.open(&mut self.arbiter, request)
    }

    /// Close a panel, returning its payload. Cancels its drag first.
    ///
    /// Unknown or already closed ids are a no-op.
    pub fn close(&mut self, id: WindowId) -> Option<P> {
        self.drag
            .close_window(&mut self.windows, id)
            .map(WindowInstance::into_payload)
    }

    /// Raise a panel; returns whether anything changed
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        self.arbiter.bring_to_front(&mut self.windows, id)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowInstance<P>> {
        self.windows.get(id)
    }

    /// Mutable payload access for the content collaborator
    pub fn payload_mut(&mut self, id: WindowId) -> Option<&mut P> {
        self.windows.payload_mut(id)
    }

    /// Snapshot of all panels, back to front
    pub fn list(&self) -> Vec<&WindowInstance<P>> {
        self.windows.list()
    }

    /// The front-most panel
    pub fn front(&self) -> Option<WindowId> {
        self.windows.front()
    }

    /// Open panels that `content` cannot render
    pub fn unrenderable<R>(&self, content: &ContentTable<R>) -> Vec<WindowId> {
        content.missing(&self.windows)
    }
}
