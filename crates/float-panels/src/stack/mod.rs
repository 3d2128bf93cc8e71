//! Stacking order arbitration
//!
//! [`StackOrderArbiter`] owns the only counter that hands out
//! [`ZOrder`] values. Every compositor owns its own arbiter, so independent
//! panel managers (one per test, say) never share stacking state.
//!
//! The counter only moves forward. Should it ever reach `u64::MAX`, the next
//! allocation renumbers the open panels densely in their current order
//! before continuing, so values stay distinct and the front panel stays on
//! top.

use serde::{Deserialize, Serialize};
use crate::window::{WindowId, WindowRegistry};

/// Stacking position of a panel; higher is closer to the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZOrder(u64);

impl ZOrder {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Single source of truth for front-to-back ordering
#[derive(Debug)]
pub struct StackOrderArbiter {
    baseline: u64,
    counter: u64,
    compactions: u64,
}

impl Default for StackOrderArbiter {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl StackOrderArbiter {
    /// Create an arbiter whose first allocation is `baseline + 1`
    pub fn new(baseline: u64) -> Self {
        Self {
            baseline,
            counter: baseline,
            compactions: 0,
        }
    }

    /// Last value handed out (the baseline before any allocation)
    #[inline]
    pub fn current(&self) -> ZOrder {
        ZOrder(self.counter)
    }

    /// How many times the counter has been renumbered
    #[inline]
    pub fn compactions(&self) -> u64 {
        self.compactions
    }

    /// Advance the counter and return the new value.
    ///
    /// Saturates at `u64::MAX` instead of wrapping. Allocations made through
    /// [`WindowRegistry::open`] and [`bring_to_front`](Self::bring_to_front)
    /// compact first, so they never observe the saturated value twice.
    pub fn next_z_order(&mut self) -> ZOrder {
        self.counter = self.counter.saturating_add(1);
        ZOrder(self.counter)
    }

    /// Make `id` the strict front-most panel.
    ///
    /// Returns `false` without touching the counter when `id` is unknown or
    /// already in front.
    pub fn bring_to_front<P>(&mut self, registry: &mut WindowRegistry<P>, id: WindowId) -> bool {
        let current = match registry.get(id) {
            Some(window) => window.z_order(),
            None => return false,
        };
        if registry.front_z_order() == Some(current) {
            return false;
        }

        let z = self.allocate(registry);
        registry.set_z_order(id, z);
        log::debug!("panel {} raised to z-order {}", id, z.get());
        true
    }

    /// Allocate a value strictly above every open panel
    pub(crate) fn allocate<P>(&mut self, registry: &mut WindowRegistry<P>) -> ZOrder {
        if self.counter == u64::MAX {
            self.compact(registry);
        }
        self.next_z_order()
    }

    /// Renumber open panels densely, keeping their relative order
    pub fn compact<P>(&mut self, registry: &mut WindowRegistry<P>) {
        let order = registry.ids_by_z();
        let count = order.len() as u64;

        // Leave room for at least one more allocation after the renumbering.
        let start = match self.baseline.checked_add(count + 1) {
            Some(end) if end < u64::MAX => self.baseline,
            _ => 0,
        };

        for (index, id) in order.into_iter().enumerate() {
            registry.set_z_order(id, ZOrder(start + index as u64 + 1));
        }
        self.counter = start + count;
        self.compactions += 1;

        log::warn!(
            "z-order counter exhausted, renumbered {} panels from {}",
            count,
            start
        );
    }
}
