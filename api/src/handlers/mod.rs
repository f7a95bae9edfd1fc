//! Error-to-response mapping shared by the route handlers

pub mod error;

pub use error::{json_error_handler, otp_error_response, validation_error_response};
