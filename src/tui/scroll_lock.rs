//! Scroll lock held while an overlay (the notification dropdown) is open.
//!
//! While any guard is alive the table ignores navigation keys. The lock is
//! released when the guard is dropped, so every way of closing the overlay
//! (explicit close, replacing the overlay, tearing down the app) releases it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared lock counter. Cloning yields a handle to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock scrolling until the returned guard is dropped.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }
}

/// Releases its share of the [`ScrollLock`] on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}
