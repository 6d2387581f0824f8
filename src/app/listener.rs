//! Registered-listener slot.
//!
//! The framework may register, replace or clear the DPP listener from any
//! thread while the HAL callback thread is delivering notifications.  The
//! slot is an `ArcSwapOption`: a reader takes one lock-free snapshot and
//! uses it for both the presence check and the call, so a concurrent swap
//! can never split a single notification across two listeners.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use log::info;

use super::ports::DppListener;

/// A listener snapshot.  Keeps the listener alive for the duration of one
/// delivery even if it is cleared concurrently.
pub type SharedListener = Arc<Box<dyn DppListener>>;

pub struct ListenerSlot {
    current: ArcSwapOption<Box<dyn DppListener>>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::new(None),
        }
    }

    /// Install `listener`, replacing any previous one.
    pub fn register(&self, listener: impl DppListener + 'static) {
        let boxed: Box<dyn DppListener> = Box::new(listener);
        self.register_shared(Arc::new(boxed));
    }

    pub fn register_shared(&self, listener: SharedListener) {
        let replaced = self.current.swap(Some(listener)).is_some();
        info!("DPP listener registered (replaced={})", replaced);
    }

    /// Remove the listener.  Returns the one that was installed, if any.
    pub fn clear(&self) -> Option<SharedListener> {
        let previous = self.current.swap(None);
        if previous.is_some() {
            info!("DPP listener cleared");
        }
        previous
    }

    pub fn is_registered(&self) -> bool {
        self.current.load().is_some()
    }

    /// Take a consistent snapshot of the current listener.
    pub fn snapshot(&self) -> Option<SharedListener> {
        self.current.load_full()
    }
}

impl Default for ListenerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}
