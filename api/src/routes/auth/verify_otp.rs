use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{otp_error_response, validation_error_response};
use crate::state::AppState;

use pl_core::services::otp::{EmailGateway, OtpStore};
use pl_shared::utils::validation::mask_email;

/// Handler for POST /api/auth/verify-otp
///
/// # Request Body
///
/// ```json
/// { "email": "jane@example.com", "code": "483920" }
/// ```
///
/// # Responses
///
/// - `200` `{ "verified": true, "email", "verified_at" }`
/// - `400` wrong code (with `remaining_attempts`) or no active code
/// - `429` attempt limit reached; a new code must be requested
pub async fn verify_otp<S, G>(
    state: web::Data<AppState<S, G>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    G: EmailGateway + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for verify_otp: {:?}", errors.field_errors().keys());
        return validation_error_response(&errors);
    }

    match state
        .otp_service
        .verify_otp(&request.email, &request.code)
        .await
    {
        Ok(verified) => {
            log::info!("Email verified: {}", mask_email(&verified.identity));
            HttpResponse::Ok().json(VerifyOtpResponse {
                verified: true,
                email: verified.identity,
                verified_at: verified.verified_at,
            })
        }
        Err(error) => {
            log::warn!(
                "verify_otp failed for {}: {}",
                mask_email(&request.email),
                error.code()
            );
            otp_error_response(&error)
        }
    }
}
