//! In-memory OTP storage
//!
//! One entry per normalized email identity, guarded by a single async
//! mutex so each trait operation is atomic. Expired entries are removed
//! lazily on read and in bulk by [`InMemoryOtpStore::purge_expired`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use pl_core::domain::entities::OtpEntry;
use pl_core::services::otp::OtpStore;
use pl_shared::utils::validation::mask_email;

/// Process-local OTP store
#[derive(Default)]
pub struct InMemoryOtpStore {
    entries: Mutex<HashMap<String, OtpEntry>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry expired at `now`, returning how many were dropped
    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    /// Remove every entry that has already expired
    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }

    /// Number of stored entries, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put(&self, identity: &str, entry: OtpEntry) {
        let replaced = self
            .entries
            .lock()
            .await
            .insert(identity.to_string(), entry)
            .is_some();
        if replaced {
            debug!("Replaced pending code for {}", mask_email(identity));
        }
    }

    async fn get(&self, identity: &str) -> Option<OtpEntry> {
        let mut entries = self.entries.lock().await;
        let expired = entries.get(identity)?.is_expired_at(Utc::now());
        if expired {
            entries.remove(identity);
            debug!("Dropped expired code for {}", mask_email(identity));
            return None;
        }
        entries.get(identity).cloned()
    }

    async fn remove(&self, identity: &str) {
        self.entries.lock().await.remove(identity);
    }

    async fn increment_attempts(&self, identity: &str) -> Option<u32> {
        let mut entries = self.entries.lock().await;
        let expired = entries.get(identity)?.is_expired_at(Utc::now());
        if expired {
            entries.remove(identity);
            return None;
        }
        let entry = entries.get_mut(identity)?;
        entry.attempts += 1;
        Some(entry.attempts)
    }
}
