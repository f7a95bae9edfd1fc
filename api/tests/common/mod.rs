//! Shared fixtures for route tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::web;

use pl_api::AppState;
use pl_core::services::otp::{generate_code, CodeGenerator, OtpService, OtpServiceConfig};
use pl_infra::email::{EmailDeliveryGateway, EmailProvider, MockEmailProvider};
use pl_infra::InMemoryOtpStore;
use pl_shared::config::AppConfig;

pub type TestState = AppState<InMemoryOtpStore, EmailDeliveryGateway>;

/// Hands out the given codes in order, then random ones
pub struct ScriptedCodes(Mutex<VecDeque<String>>);

impl CodeGenerator for ScriptedCodes {
    fn generate(&self) -> String {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(generate_code)
    }
}

pub struct Fixture {
    pub state: web::Data<TestState>,
    pub store: Arc<InMemoryOtpStore>,
    pub provider: Arc<MockEmailProvider>,
}

pub fn fixture(codes: &[&str]) -> Fixture {
    fixture_with(AppConfig::default(), codes, vec![])
}

/// Build state around a quiet mock provider, optionally preceded by others
pub fn fixture_with(
    config: AppConfig,
    codes: &[&str],
    mut leading: Vec<Arc<dyn EmailProvider>>,
) -> Fixture {
    let provider = Arc::new(MockEmailProvider::with_options(false, false));
    leading.push(provider.clone());

    let store = Arc::new(InMemoryOtpStore::new());
    let gateway = Arc::new(EmailDeliveryGateway::new(leading, Duration::from_secs(1)));
    let generator = Arc::new(ScriptedCodes(Mutex::new(
        codes.iter().map(|c| c.to_string()).collect(),
    )));
    let service = OtpService::new(store.clone(), gateway, OtpServiceConfig::from(&config.otp))
        .with_generator(generator);

    Fixture {
        state: web::Data::new(AppState::new(Arc::new(service), Arc::new(config))),
        store,
        provider,
    }
}
