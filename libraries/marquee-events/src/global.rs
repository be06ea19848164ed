//! Process-wide default buses
//!
//! Components that can't be handed a bus share one per vocabulary. The slot
//! builds its bus on first access; `reset` clears that bus's listeners and
//! empties the slot so the next access builds a fresh one.

use crate::bus::{EventBus, Vocabulary};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Lazily-built shared bus for vocabulary `V`
pub struct GlobalBus<V: Vocabulary> {
    slot: Mutex<Option<EventBus<V>>>,
}

impl<V: Vocabulary> GlobalBus<V> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Handle to the shared bus, building it if needed
    pub fn get(&self) -> EventBus<V> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert_with(|| {
            debug!("Creating global {} bus", V::NAME);
            EventBus::new()
        })
        .clone()
    }

    /// Clear the shared bus and forget it
    ///
    /// Handles obtained before the reset keep pointing at the old, now empty,
    /// bus; they no longer reach anything subscribed after the reset.
    pub fn reset(&self) {
        let previous = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(bus) = previous {
            bus.remove_all_listeners();
            debug!("Reset global {} bus", V::NAME);
        }
    }
}

impl<V: Vocabulary> Default for GlobalBus<V> {
    fn default() -> Self {
        Self::new()
    }
}
