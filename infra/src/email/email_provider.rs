//! Email provider trait

use async_trait::async_trait;

use super::message::EmailMessage;
use crate::InfrastructureError;

/// A single email transport
///
/// Implementations make exactly one attempt per call and leave retries and
/// fallback to [`super::EmailDeliveryGateway`].
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Hand a message to the transport
    ///
    /// # Returns
    ///
    /// * `Ok(Some(id))` - Accepted, with the provider's message identifier
    /// * `Ok(None)` - Accepted, no identifier reported
    /// * `Err(_)` - Rejected; the error text must not contain credentials or
    ///   the message body
    async fn send_email(&self, message: &EmailMessage) -> Result<Option<String>, InfrastructureError>;

    /// Name reported in delivery results and logs
    fn provider_name(&self) -> &str;
}
