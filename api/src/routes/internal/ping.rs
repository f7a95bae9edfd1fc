use actix_web::{http::header, web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::dto::internal::PingResponse;
use crate::state::AppState;

use pl_core::services::otp::{EmailGateway, OtpStore};

/// Handler for GET /internal/ping
///
/// Reports instance time, the origin the request arrived with, and the
/// CORS, email and OTP settings in effect.
pub async fn ping<S, G>(req: HttpRequest, state: web::Data<AppState<S, G>>) -> HttpResponse
where
    S: OtpStore + 'static,
    G: EmailGateway + 'static,
{
    let origin_received = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let config = &state.config;
    let otp = state.otp_service.config();

    HttpResponse::Ok().json(PingResponse {
        ok: true,
        time: Utc::now(),
        origin_received,
        allow_all: config.cors.allow_all,
        allowed_origins: config.cors.allowed_origins.clone(),
        environment: config.environment.to_string(),
        email_providers: state.otp_service.gateway().provider_names(),
        otp_ttl_seconds: otp.ttl_seconds,
        otp_max_attempts: otp.max_attempts,
    })
}
