//! Health check endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Estado del servicio
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Estado: `ok` — el servicio funciona con normalidad
    pub status: String,
    /// Versión del servicio (de Cargo.toml)
    pub version: String,
}

/// Comprobación del estado del servicio
///
/// Devuelve el estado actual y la versión. No requiere autenticación.
/// Úselo para monitorizar la disponibilidad.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "El servicio funciona con normalidad", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
