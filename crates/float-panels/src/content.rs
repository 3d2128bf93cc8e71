//! Type tag to content renderer lookup
//!
//! The table belongs to the content layer, not to the panel manager: the
//! manager tracks panels whose tag has no renderer just like any other, and
//! [`ContentTable::missing`] lets the host check the boundary explicitly.

use std::collections::HashMap;
use crate::window::{TypeTag, WindowId, WindowRegistry};

/// Renderers keyed by [`TypeTag`]
#[derive(Debug)]
pub struct ContentTable<R> {
    renderers: HashMap<TypeTag, R>,
}

impl<R> Default for ContentTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ContentTable<R> {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer, returning the one it replaces
    pub fn register(&mut self, tag: impl Into<TypeTag>, renderer: R) -> Option<R> {
        self.renderers.insert(tag.into(), renderer)
    }

    /// Renderer for `tag`
    pub fn resolve(&self, tag: &TypeTag) -> Option<&R> {
        self.renderers.get(tag)
    }

    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.renderers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Open panels whose tag has no renderer, back to front
    pub fn missing<P>(&self, windows: &WindowRegistry<P>) -> Vec<WindowId> {
        windows
            .list()
            .into_iter()
            .filter(|w| !self.contains(w.type_tag()))
            .map(|w| w.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::StackOrderArbiter;
    use crate::window::OpenRequest;

    #[test]
    fn test_register_and_resolve() {
        let mut table = ContentTable::new();
        assert!(table.register("customer-form", 1).is_none());
        assert_eq!(table.register("customer-form", 2), Some(1));

        assert_eq!(table.resolve(&TypeTag::from("customer-form")), Some(&2));
        assert!(table.resolve(&TypeTag::from("unknown")).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_reports_unrenderable_panels() {
        let mut table = ContentTable::new();
        table.register("payment", "PaymentForm");

        let mut registry = WindowRegistry::new();
        let mut arbiter = StackOrderArbiter::default();
        let known = registry.open(&mut arbiter, OpenRequest::new("payment", ()));
        let unknown = registry.open(&mut arbiter, OpenRequest::new("mystery", ()));

        assert!(registry.contains(unknown));
        assert_eq!(table.missing(&registry), vec![unknown]);
        assert!(!table.missing(&registry).contains(&known));
    }
}
