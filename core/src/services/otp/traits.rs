//! Traits for OTP storage and email delivery integration

use async_trait::async_trait;

use crate::domain::entities::OtpEntry;
use crate::domain::value_objects::DeliveryResult;

/// Storage of pending codes, one entry per identity
///
/// Each operation is atomic with respect to the others. Expiry is lazy:
/// `get` on an expired entry removes it and returns `None`.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store an entry, replacing any existing one for `identity`
    async fn put(&self, identity: &str, entry: OtpEntry);
    /// Fetch the live entry for `identity`
    async fn get(&self, identity: &str) -> Option<OtpEntry>;
    /// Delete the entry for `identity`, if any
    async fn remove(&self, identity: &str);
    /// Increment the attempt counter; `None` if there is no live entry
    async fn increment_attempts(&self, identity: &str) -> Option<u32>;
}

/// Delivery of codes to a mailbox
///
/// Implementations never fail past this boundary: every transport error,
/// timeout or missing configuration is reported as
/// [`DeliveryResult::Failed`].
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// Send `code` to `recipient_email`, addressed to `recipient_name`
    async fn send(&self, recipient_name: &str, recipient_email: &str, code: &str) -> DeliveryResult;

    /// Names of the configured providers, in the order they are tried
    fn provider_names(&self) -> Vec<String>;
}
