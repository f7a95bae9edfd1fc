//! CORS middleware configuration for cross-origin requests.
//!
//! Browser frontends are admitted from an allow-list built from
//! `FRONTEND_ORIGIN` and `FRONTEND_PROD_ORIGIN`, or from anywhere when
//! `ALLOW_ALL_ORIGINS=true`. Credentials are supported in both modes.
//! Requests without an `Origin` header (curl, server-to-server) are not
//! subject to CORS and pass through.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pl_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age)
        .supports_credentials();

    if config.allow_all {
        log::warn!("CORS configured to allow any origin");
        return cors.allow_any_origin();
    }

    log::info!("CORS allowed origins: {:?}", config.allowed_origins);
    let allowed = config.clone();
    cors.allowed_origin_fn(move |origin, _req| {
        origin
            .to_str()
            .map(|origin| allowed.is_origin_allowed(origin))
            .unwrap_or(false)
    })
}
