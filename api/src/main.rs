use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use log::{info, warn};

use pl_api::{create_app, AppState};
use pl_core::services::otp::{EmailGateway, OtpService, OtpServiceConfig};
use pl_infra::{create_email_gateway, spawn_expiry_sweeper, InMemoryOtpStore};
use pl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Arc::new(AppConfig::from_env());

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting Platter API Server ({})", config.environment);

    let store = Arc::new(InMemoryOtpStore::new());
    let gateway = Arc::new(
        create_email_gateway(&config.email)
            .with_expiry_minutes(config.otp.ttl_minutes().max(1) as u64),
    );

    let providers = gateway.provider_names();
    if providers.is_empty() {
        warn!("No email provider configured; set SENDGRID_API_KEY or SMTP_HOST/SMTP_USER/SMTP_PASS");
    } else {
        info!("Email providers: {}", providers.join(", "));
    }

    let otp_service = Arc::new(OtpService::new(
        store.clone(),
        gateway,
        OtpServiceConfig::from(&config.otp),
    ));
    info!(
        "OTP codes expire after {}s with {} attempts",
        config.otp.ttl_seconds, config.otp.max_attempts
    );

    let sweeper = spawn_expiry_sweeper(
        store,
        Duration::from_secs(config.otp.sweep_interval_seconds),
    );

    let app_state = web::Data::new(AppState::new(otp_service, config.clone()));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    sweeper.abort();
    info!("Server stopped");
    Ok(())
}
