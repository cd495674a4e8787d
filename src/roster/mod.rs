//! Session state for the split engine.
//!
//! The [`RosterManager`] owns the members and the total of one session.
//! Callers that share a session between threads go through
//! [`SharedRoster`], which serializes every mutation behind a mutex.

mod manager;

use std::sync::{Arc, Mutex, MutexGuard};

pub use manager::{DEFAULT_MEMBER_COUNT, MEMBER_COUNT_LIMIT, RosterManager};

/// A roster shared between callers.
///
/// Each call to [`lock`](Self::lock) holds the roster for a full
/// lookup, mutate, recompute and snapshot cycle, so two mutations can never
/// interleave their updates.
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    inner: Arc<Mutex<RosterManager>>,
}

impl SharedRoster {
    /// Wraps a roster for shared use.
    pub fn new(roster: RosterManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(roster)),
        }
    }

    /// Locks the roster for exclusive access.
    ///
    /// A poisoned lock is recovered. [`RosterManager`] stores a mutation only
    /// after its allocation has been computed, so a panic while the lock is
    /// held leaves the last committed state behind.
    pub fn lock(&self) -> MutexGuard<'_, RosterManager> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
