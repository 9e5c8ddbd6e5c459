//! Common API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envoltura estándar de las respuestas del API
///
/// Todos los endpoints REST devuelven los datos en esta envoltura.
/// En caso de éxito: `{"success": true, "data": {...}}`,
/// en caso de error: `{"success": false, "error": "descripción"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` si la petición se procesó correctamente
    pub success: bool,
    /// Carga útil (datos). `null` en caso de error
    pub data: Option<T>,
    /// Descripción del error. `null` en caso de éxito
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
