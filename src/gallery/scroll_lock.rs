// SPDX-License-Identifier: MPL-2.0
//! Reference-counted page scroll lock.
//!
//! Every open modal holds a [`ScrollLockGuard`]. The page stays locked while
//! at least one guard is alive, so modals of independent gallery instances
//! compose: the lock is lifted only when the last one closes.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static GLOBAL: OnceLock<ScrollLockRegistry> = OnceLock::new();

/// Shared counter of active scroll-lock holders.
#[derive(Debug, Clone, Default)]
pub struct ScrollLockRegistry {
    holders: Arc<Mutex<usize>>,
}

impl ScrollLockRegistry {
    /// Creates an independent registry (one per page).
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static ScrollLockRegistry {
        GLOBAL.get_or_init(ScrollLockRegistry::new)
    }

    /// Takes one hold on the lock. The page locks on the first hold.
    #[must_use = "dropping the guard releases the lock immediately"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut holders = self.holders();
        if *holders == 0 {
            tracing::debug!("page scroll locked");
        }
        *holders += 1;
        ScrollLockGuard {
            registry: self.clone(),
            released: false,
        }
    }

    /// Whether page scrolling is currently suppressed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self.holders() > 0
    }

    /// Number of live holds.
    #[must_use]
    pub fn holders_count(&self) -> usize {
        *self.holders()
    }

    fn release_one(&self) {
        let mut holders = self.holders();
        // Floor at zero: an unpaired release must not wrap the counter.
        *holders = holders.saturating_sub(1);
        if *holders == 0 {
            tracing::debug!("page scroll unlocked");
        }
    }

    fn holders(&self) -> MutexGuard<'_, usize> {
        self.holders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One hold on the page scroll lock. Released on [`release`](Self::release)
/// or drop, whichever comes first.
#[derive(Debug)]
pub struct ScrollLockGuard {
    registry: ScrollLockRegistry,
    released: bool,
}

impl ScrollLockGuard {
    /// Gives the hold back.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if !self.released {
            self.released = true;
            self.registry.release_one();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}
