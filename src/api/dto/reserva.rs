//! Reserva DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Reserva;

/// Petición para crear una reserva
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "fecha": "2024-06-10",
    "sala": "A",
    "hora": "09:30 AM"
}))]
pub struct CreateReservaRequest {
    /// Fecha de la reserva en formato `AAAA-MM-DD`
    pub fecha: String,
    /// Sala a reservar: `A`, `B` o `C`
    pub sala: String,
    /// Hora en formato de 12 horas: `hh:mm AM|PM`
    pub hora: String,
}

/// Reserva en las respuestas del API
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservaDto {
    /// Identificador único de la reserva
    pub id: String,
    /// Usuario propietario
    pub usuario: String,
    /// Fecha de la reserva (`AAAA-MM-DD`)
    pub fecha: String,
    /// Sala reservada: `A`, `B` o `C`
    pub sala: String,
    /// Hora de la reserva (`hh:mm AM|PM`)
    pub hora: String,
    /// Fecha de creación (ISO 8601)
    pub created_at: String,
}

impl From<Reserva> for ReservaDto {
    fn from(r: Reserva) -> Self {
        Self {
            id: r.id,
            usuario: r.usuario,
            fecha: r.fecha.to_string(),
            sala: r.sala.as_str().to_string(),
            hora: r.hora,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
