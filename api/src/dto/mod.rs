//! Request and response bodies

pub mod auth;
pub mod internal;

pub use pl_shared::errors::ErrorResponse;
