// SPDX-License-Identifier: MIT

//! Gateway request log hook.
//!
//! The in-app debug console subscribes here to see every gateway
//! request. One subscriber slot is enough for that use; `subscribe`
//! returns a handle that unregisters on drop, so a dismissed console
//! screen cannot leave a stale callback behind.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// One observed gateway request.
#[derive(Debug, Clone)]
pub struct NetworkLogEntry {
    pub method: String,
    pub url: String,
    /// None when the request never got a response
    pub status: Option<u16>,
    pub duration_ms: u64,
    /// RFC3339 timestamp
    pub at: String,
}

type Listener = Arc<dyn Fn(&NetworkLogEntry) + Send + Sync>;
type Slot = Arc<Mutex<Option<(u64, Listener)>>>;

/// Single-subscriber registry for gateway request logs.
#[derive(Clone, Default)]
pub struct NetworkLog {
    slot: Slot,
    next_id: Arc<AtomicU64>,
}

impl NetworkLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber, displacing any previous one.
    ///
    /// The returned handle unregisters the subscriber when dropped.
    pub fn subscribe(
        &self,
        listener: impl Fn(&NetworkLogEntry) + Send + Sync + 'static,
    ) -> NetworkLogHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut slot = self.lock_slot();
        if slot.is_some() {
            tracing::debug!("Replacing existing network log subscriber");
        }
        *slot = Some((id, Arc::new(listener)));
        drop(slot);

        NetworkLogHandle {
            id,
            slot: Arc::clone(&self.slot),
        }
    }

    /// Deliver an entry to the current subscriber, if any.
    pub fn publish(&self, entry: &NetworkLogEntry) {
        let listener = self.lock_slot().as_ref().map(|(_, l)| Arc::clone(l));
        if let Some(listener) = listener {
            listener(entry);
        }
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<(u64, Listener)>> {
        // Listeners run outside the lock, so a poisoned slot only means a
        // subscriber swap panicked; the map itself is still usable.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Subscription handle; dropping it unregisters the subscriber unless a
/// newer subscriber has already taken the slot.
pub struct NetworkLogHandle {
    id: u64,
    slot: Slot,
}

impl Drop for NetworkLogHandle {
    fn drop(&mut self) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|(id, _)| *id == self.id) {
            *slot = None;
        }
    }
}
