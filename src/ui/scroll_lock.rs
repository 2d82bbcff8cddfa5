// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock shared by every lightbox on the page.
//!
//! The lock is a counter of live [`ScrollLockGuard`]s. The page is locked
//! while at least one guard exists; a guard releases its share when dropped,
//! so closing a lightbox and tearing it down while open take the same path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handle to the page-wide scroll lock. Cloning shares the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a share of the lock for as long as the returned guard lives.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(holders = previous + 1, "page scroll locked");
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns true while any guard is alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// A live share of the [`ScrollLock`].
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(holders = previous.saturating_sub(1), "page scroll lock released");
    }
}
