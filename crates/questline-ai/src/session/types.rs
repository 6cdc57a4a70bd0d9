//! Session concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::CompletionError;

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if a round-trip is
    /// already in flight on this session.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, CompletionError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(CompletionError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
