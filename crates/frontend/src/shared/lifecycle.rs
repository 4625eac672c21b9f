//! Component lifetime tracking for async tasks

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that flips to "disposed" when the owning component is torn down.
///
/// Tasks spawned by a component keep a clone and check `is_alive()` before
/// writing their result back into the component's signals.
#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a guard that is disposed together with the current reactive owner
    pub fn attach() -> Self {
        let guard = Self::new();
        let on_dispose = guard.clone();
        on_cleanup(move || on_dispose.dispose());
        guard
    }

    pub fn dispose(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_is_shared_between_clones() {
        let guard = MountGuard::new();
        let task_copy = guard.clone();
        assert!(task_copy.is_alive());

        guard.dispose();
        assert!(!task_copy.is_alive());
        assert!(!guard.is_alive());
    }

    #[test]
    fn test_attach_follows_owner() {
        let owner = leptos::prelude::Owner::new();
        let guard = owner.with(MountGuard::attach);
        assert!(guard.is_alive());

        owner.cleanup();
        assert!(!guard.is_alive());
    }
}
