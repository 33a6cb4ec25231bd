//! Exclusive keyboard listener slot.
//!
//! A window owns one slot. Whoever holds the [`ListenerGuard`] receives the
//! global key stream; a second attach fails until the guard is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::focus::FocusError;

#[derive(Debug, Clone, Default)]
pub struct ListenerSlot {
    held: Arc<AtomicBool>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    /// Take the slot, failing if another listener already holds it
    pub fn acquire(&self) -> Result<ListenerGuard, FocusError> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FocusError::ListenerBusy)?;
        Ok(ListenerGuard {
            held: Arc::clone(&self.held),
        })
    }
}

/// Releases the slot when dropped
#[derive(Debug)]
pub struct ListenerGuard {
    held: Arc<AtomicBool>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}
