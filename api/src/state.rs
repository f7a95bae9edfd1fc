//! Shared application state

use std::sync::Arc;

use pl_core::services::otp::{EmailGateway, OtpService, OtpStore};
use pl_shared::config::AppConfig;

/// Application state that holds shared services
pub struct AppState<S, G>
where
    S: OtpStore,
    G: EmailGateway,
{
    pub otp_service: Arc<OtpService<S, G>>,
    pub config: Arc<AppConfig>,
}

impl<S, G> AppState<S, G>
where
    S: OtpStore,
    G: EmailGateway,
{
    pub fn new(otp_service: Arc<OtpService<S, G>>, config: Arc<AppConfig>) -> Self {
        Self { otp_service, config }
    }
}
