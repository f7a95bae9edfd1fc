//! Liveness endpoints used by hosting health checks

use actix_web::HttpResponse;

use pl_shared::types::HealthResponse;

/// Handler for GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend is running!")
}

/// Handler for HEAD / (200, no body)
pub async fn index_head() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("platter-api", env!("CARGO_PKG_VERSION")))
}
