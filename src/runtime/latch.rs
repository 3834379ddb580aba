//! Single-use completion latch for blocking command handles.

// ============================================================================
// Imports
// ============================================================================

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

// ============================================================================
// Latch
// ============================================================================

/// Blocks waiters until released once.
///
/// Releasing more than once has no further effect.
#[derive(Debug, Default)]
pub struct Latch {
    released: Mutex<bool>,
    cond: Condvar,
}

impl Latch {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the latch and wakes every waiter.
    pub fn release(&self) {
        let mut released = self.released.lock();
        *released = true;
        self.cond.notify_all();
    }

    /// Returns `true` once [`release`](Self::release) has been called.
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        *self.released.lock()
    }

    /// Blocks until the latch is released.
    pub fn wait(&self) {
        let mut released = self.released.lock();
        while !*released {
            self.cond.wait(&mut released);
        }
    }

    /// Blocks until the latch is released or `timeout` elapses.
    ///
    /// Returns `true` if the latch was released.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut released = self.released.lock();
        while !*released {
            if self.cond.wait_until(&mut released, deadline).timed_out() {
                break;
            }
        }
        *released
    }
}

// ============================================================================
// Tests
// ============================================================================
