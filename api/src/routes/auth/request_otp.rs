use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{RequestOtpRequest, RequestOtpResponse};
use crate::handlers::{otp_error_response, validation_error_response};
use crate::state::AppState;

use pl_core::services::otp::{EmailGateway, OtpStore};
use pl_shared::utils::validation::mask_email;

/// Handler for POST /api/auth/request-otp
///
/// Issues a verification code for the address and emails it.
///
/// # Request Body
///
/// ```json
/// { "name": "Jane", "email": "jane@example.com" }
/// ```
///
/// # Responses
///
/// - `200` `{ "message", "provider", "expires_in" }`
/// - `400` malformed address or request
/// - `503` no provider accepted the email; requesting again re-issues
pub async fn request_otp<S, G>(
    state: web::Data<AppState<S, G>>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    G: EmailGateway + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("Validation failed for request_otp: {:?}", errors.field_errors().keys());
        return validation_error_response(&errors);
    }

    log::info!("Processing request_otp for {}", mask_email(&request.email));

    match state
        .otp_service
        .request_otp(&request.name, &request.email)
        .await
    {
        Ok(delivery) => HttpResponse::Ok().json(RequestOtpResponse {
            message: "Verification code sent".to_string(),
            provider: delivery.provider().to_string(),
            expires_in: state.otp_service.config().ttl_seconds,
        }),
        Err(error) => {
            log::warn!(
                "request_otp failed for {}: {}",
                mask_email(&request.email),
                error.code()
            );
            otp_error_response(&error)
        }
    }
}
