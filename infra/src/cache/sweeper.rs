//! Background purge of expired OTP entries

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::otp_store::InMemoryOtpStore;

/// Spawn a task that purges expired entries every `interval`
///
/// Lazy expiry on read already keeps verification correct; the sweeper
/// only bounds memory held by codes nobody comes back for. Abort the
/// returned handle to stop it.
pub fn spawn_expiry_sweeper(store: Arc<InMemoryOtpStore>, interval: Duration) -> JoinHandle<()> {
    info!("Starting OTP expiry sweeper (every {:?})", interval);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                debug!(purged = purged, event = "otp_swept", "Purged expired verification codes");
            }
        }
    })
}
