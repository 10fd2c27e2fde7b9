use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness probe. Deliberately touches no dependencies: the case store is
/// in-process and storage problems surface on upload, so "the process
/// answers" is the whole signal.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "PetRescue API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
