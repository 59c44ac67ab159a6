//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub backend: &'static str,
}

/// Health check endpoint - returns server status and backend reachability.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let backend = match state.api.health().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Backend health probe failed");
            "unreachable"
        }
    };

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        backend,
    };

    HttpResponse::Ok().json(response)
}
