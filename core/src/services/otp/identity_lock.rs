//! Per-identity mutual exclusion
//!
//! Serializes the read-modify-write sequences of issuance and verification
//! for one identity while leaving other identities unaffected. Entries are
//! dropped from the map as soon as nobody holds or waits on them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of async locks keyed by identity
#[derive(Debug, Default)]
pub struct IdentityLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Held lock for one identity; released on drop
#[derive(Debug)]
pub struct IdentityGuard<'a> {
    registry: &'a IdentityLocks,
    identity: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl IdentityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `identity`
    pub async fn lock(&self, identity: &str) -> IdentityGuard<'_> {
        let mutex = {
            let mut locks = self.registry();
            locks
                .entry(identity.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        let guard = mutex.lock_owned().await;
        IdentityGuard {
            registry: self,
            identity: identity.to_string(),
            guard: Some(guard),
        }
    }

    /// Number of identities currently locked or awaited
    pub fn active(&self) -> usize {
        self.registry().len()
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<String, Arc<AsyncMutex<()>>>> {
        // The map is only mutated through entry/remove, so a poisoned
        // guard still holds a consistent map.
        self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for IdentityGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut locks = self.registry.registry();
        if let Some(mutex) = locks.get(&self.identity) {
            // Only the registry still references it: nobody holds or waits
            if Arc::strong_count(mutex) == 1 {
                locks.remove(&self.identity);
            }
        }
    }
}
