use actix_web::{web, HttpResponse};

use crate::dto::internal::{TestEmailFailure, TestEmailQuery, TestEmailRequest, TestEmailResponse};
use crate::state::AppState;

use pl_core::services::otp::{EmailGateway, OtpStore};
use pl_shared::types::MessageResponse;
use pl_shared::utils::validation::mask_email;

/// Recipient name used for diagnostic emails
const TEST_RECIPIENT_NAME: &str = "Test User";

/// Handler for POST /internal/test-email
///
/// Sends a throwaway code through the configured providers without
/// creating a verification entry. The address comes from the JSON body or
/// the `email` query parameter.
pub async fn test_email<S, G>(
    state: web::Data<AppState<S, G>>,
    query: web::Query<TestEmailQuery>,
    body: Option<web::Json<TestEmailRequest>>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    G: EmailGateway + 'static,
{
    let email = body
        .and_then(|b| b.into_inner().email)
        .or_else(|| query.into_inner().email)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    let Some(email) = email else {
        return HttpResponse::BadRequest().json(MessageResponse::new("email required"));
    };

    log::info!("Sending test email to {}", mask_email(&email));

    let result = state
        .otp_service
        .send_test_code(TEST_RECIPIENT_NAME, &email)
        .await;

    if result.is_ok() {
        return HttpResponse::Ok().json(TestEmailResponse {
            message: "Test email queued/sent".to_string(),
            provider: result.provider().to_string(),
        });
    }

    let error = result.error().unwrap_or("unknown error").to_string();
    log::error!(
        "Test email to {} failed via {}: {}",
        mask_email(&email),
        result.provider(),
        error
    );
    HttpResponse::InternalServerError().json(TestEmailFailure {
        message: "Test email send failed".to_string(),
        error,
    })
}

