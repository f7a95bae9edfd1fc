//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`].

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::handlers::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::{auth, internal, root};
use crate::state::AppState;

use pl_core::services::otp::{EmailGateway, OtpStore};
use pl_shared::errors::{error_codes, ErrorResponse};

/// Access log line: time, request line, status, Origin header, latency
const ACCESS_LOG_FORMAT: &str = r#"%t "%r" %s Origin:%{Origin}i %Dms"#;

/// Create and configure the application with all dependencies
pub fn create_app<S, G>(
    app_state: web::Data<AppState<S, G>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: OtpStore + 'static,
    G: EmailGateway + 'static,
{
    let cors = create_cors(&app_state.config.cors);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Middleware (last registered runs first, so every request is logged)
        .wrap(cors)
        .wrap(Logger::new(ACCESS_LOG_FORMAT))
        // Liveness
        .route("/", web::get().to(root::index))
        .route("/", web::head().to(root::index_head))
        .route("/health", web::get().to(root::health_check))
        // Email verification
        .service(
            web::scope("/api/auth")
                .route("/request-otp", web::post().to(auth::request_otp::<S, G>))
                .route("/verify-otp", web::post().to(auth::verify_otp::<S, G>)),
        )
        // Diagnostics
        .service(
            web::scope("/internal")
                .route("/test-email", web::post().to(internal::test_email::<S, G>))
                .route("/ping", web::get().to(internal::ping::<S, G>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
