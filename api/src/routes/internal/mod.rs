//! Diagnostic endpoints for checking a deployment's configuration

pub mod ping;
pub mod test_email;

pub use ping::ping;
pub use test_email::test_email;
