//! Outcome of handing a message to the email transport

use serde::{Deserialize, Serialize};

/// Provider name reported when no transport is configured
pub const NO_PROVIDER: &str = "none";

/// Result of one delivery call
///
/// `Delivered` means a provider accepted the message for sending; there is
/// no delivery-receipt tracking. `Failed` names the last provider tried
/// (or [`NO_PROVIDER`]) and carries diagnostic detail that never contains
/// the code or credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryResult {
    Delivered {
        provider: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message_id: Option<String>,
    },
    Failed {
        provider: String,
        error: String,
    },
}

impl DeliveryResult {
    pub fn delivered(provider: impl Into<String>, message_id: Option<String>) -> Self {
        Self::Delivered {
            provider: provider.into(),
            message_id,
        }
    }

    pub fn failed(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failed {
            provider: provider.into(),
            error: error.into(),
        }
    }

    /// Failure reported when no provider is configured at all
    pub fn no_provider() -> Self {
        Self::failed(NO_PROVIDER, "no email provider is configured")
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Provider that handled (or last attempted) the send
    pub fn provider(&self) -> &str {
        match self {
            Self::Delivered { provider, .. } | Self::Failed { provider, .. } => provider,
        }
    }

    /// Diagnostic detail for a failed send
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Delivered { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}
