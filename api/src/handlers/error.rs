use std::collections::HashMap;

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use pl_core::errors::OtpError;
use pl_shared::errors::{error_codes, ErrorResponse};

/// HTTP status for each OTP failure
pub fn status_for(error: &OtpError) -> StatusCode {
    match error {
        OtpError::InvalidRecipient => StatusCode::BAD_REQUEST,
        OtpError::ProviderFailure { .. } => StatusCode::SERVICE_UNAVAILABLE,
        OtpError::NoActiveOtp => StatusCode::BAD_REQUEST,
        OtpError::CodeMismatch { .. } => StatusCode::BAD_REQUEST,
        OtpError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
    }
}

/// Convert an OTP failure into a JSON error response
///
/// Provider detail stays out of the body; the service logs it.
pub fn otp_error_response(error: &OtpError) -> HttpResponse {
    let message = match error {
        OtpError::InvalidRecipient => "Please provide a valid email address",
        OtpError::ProviderFailure { .. } => {
            "We could not send the verification email right now. Please try again shortly"
        }
        OtpError::NoActiveOtp => {
            "No active verification code for this email. Please request a new code"
        }
        OtpError::CodeMismatch { .. } => "The verification code is incorrect",
        OtpError::TooManyAttempts => {
            "Too many incorrect attempts. Please request a new verification code"
        }
    };

    let mut response = ErrorResponse::new(error.code(), message);
    if let OtpError::CodeMismatch { remaining_attempts } = error {
        response = response.add_detail("remaining_attempts", remaining_attempts);
    }

    HttpResponse::build(status_for(error)).json(response)
}

/// Convert request validation failures into a 400 response listing the
/// offending fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
        .add_detail("fields", fields);

    HttpResponse::BadRequest().json(response)
}

/// Turn malformed JSON bodies into the standard error shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "Request body must be valid JSON",
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}
