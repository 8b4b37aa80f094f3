/*
 * Opt-in UI-thread bookkeeping. Attaching a swap chain mutates the panel and
 * must happen on the thread that owns it; the adapter cannot enforce that, but a
 * host can register its UI thread once so debug builds report calls that arrive
 * from elsewhere. Nothing here blocks, dispatches or rejects a call.
 */

use std::sync::OnceLock;
use std::thread::{self, ThreadId};

/// Process-wide registration used by the exports.
pub(crate) static UI_THREAD: UiThreadAffinity = UiThreadAffinity::new();

#[derive(Debug)]
pub struct UiThreadAffinity {
    owner: OnceLock<ThreadId>,
}

impl UiThreadAffinity {
    pub const fn new() -> Self {
        Self {
            owner: OnceLock::new(),
        }
    }

    /// Records the calling thread as the UI thread. Returns `false` if a thread
    /// was already registered; the first registration is kept.
    pub fn register_current(&self) -> bool {
        self.owner.set(thread::current().id()).is_ok()
    }

    /// `None` when no UI thread has been registered.
    pub fn is_current(&self) -> Option<bool> {
        self.owner.get().map(|owner| *owner == thread::current().id())
    }

    /*
     * Debug-build check run before the panel is mutated. Logs instead of
     * asserting because it runs underneath an `extern "C"` frame.
     */
    pub fn warn_if_foreign(&self, operation: &str) {
        if cfg!(debug_assertions) && self.is_current() == Some(false) {
            log::warn!(
                "Affinity: {operation} called on {:?}, which is not the registered UI thread {:?}",
                thread::current().id(),
                self.owner.get()
            );
        }
    }
}

impl Default for UiThreadAffinity {
    fn default() -> Self {
        Self::new()
    }
}
