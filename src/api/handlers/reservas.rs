//! Reserva REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::api::dto::{ApiResponse, CreateReservaRequest, ReservaDto};
use crate::auth::AuthenticatedUser;
use crate::domain::reserva::{es_domingo, hora_valida, parse_fecha};
use crate::domain::{Reserva, ReservaRepository, Sala};

/// Application state for reserva handlers
#[derive(Clone)]
pub struct ReservaAppState {
    pub repo: Arc<dyn ReservaRepository>,
}

fn bad_request(message: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
}

/// Listado de reservas del usuario autenticado
///
/// Devuelve todas las reservas cuyo propietario es el usuario del token.
/// Una lista vacía es una respuesta válida.
#[utoipa::path(
    get,
    path = "/reservas",
    tag = "Reservas",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reservas del usuario", body = ApiResponse<Vec<ReservaDto>>),
        (status = 401, description = "Sin credenciales"),
        (status = 403, description = "Token inválido")
    )
)]
pub async fn list_reservas(
    State(state): State<ReservaAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<ReservaDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repo.find_for_user(&user.user_id).await {
        Ok(reservas) => {
            let dtos: Vec<ReservaDto> = reservas.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e) => Err(internal_error(e)),
    }
}

/// Creación de una reserva
///
/// Valida la sala, el formato de hora y la fecha antes de guardar.
/// No se permiten reservas los domingos.
#[utoipa::path(
    post,
    path = "/reservas",
    tag = "Reservas",
    security(("bearer_auth" = [])),
    request_body = CreateReservaRequest,
    responses(
        (status = 201, description = "Reserva creada", body = ApiResponse<ReservaDto>),
        (status = 400, description = "Sala, hora o fecha inválidas"),
        (status = 401, description = "Sin credenciales"),
        (status = 403, description = "Token inválido")
    )
)]
pub async fn create_reserva(
    State(state): State<ReservaAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateReservaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservaDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    // 1) Sala must belong to the fixed set
    let Some(sala) = Sala::parse(&request.sala) else {
        return Err(bad_request("Sala inválida"));
    };

    // 2) hh:mm AM/PM only
    if !hora_valida(&request.hora) {
        return Err(bad_request("Formato de hora inválido. Use hh:mm AM/PM"));
    }

    // 3) Weekday is computed from the calendar components, never from a
    //    timestamp that could shift across a timezone boundary
    let Some(fecha) = parse_fecha(&request.fecha) else {
        return Err(bad_request("Fecha inválida. Use AAAA-MM-DD"));
    };

    if es_domingo(fecha) {
        return Err(bad_request("No se permiten reservas los domingos"));
    }

    // No conflict check: the same fecha/sala/hora can be booked again
    let reserva = Reserva::new(&user.user_id, fecha, sala, &request.hora);
    match state.repo.save(reserva.clone()).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(reserva.into())),
        )),
        Err(e) => Err(internal_error(e)),
    }
}

/// Cancelación de una reserva
///
/// Elimina la reserva solo si pertenece al usuario autenticado. Una reserva
/// inexistente y una reserva ajena devuelven la misma respuesta 404.
#[utoipa::path(
    delete,
    path = "/reservas/{id}",
    tag = "Reservas",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Identificador de la reserva")
    ),
    responses(
        (status = 200, description = "Reserva cancelada", body = ApiResponse<String>),
        (status = 404, description = "Reserva no encontrada o de otro usuario"),
        (status = 401, description = "Sin credenciales"),
        (status = 403, description = "Token inválido")
    )
)]
pub async fn delete_reserva(
    State(state): State<ReservaAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repo.delete_for_user(&id, &user.user_id).await {
        // not-found and not-owned are indistinguishable on purpose
        Ok(0) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Reserva no encontrada o no autorización")),
        )),
        Ok(_) => Ok(Json(ApiResponse::success("Reserva cancelada".to_string()))),
        Err(e) => Err(internal_error(e)),
    }
}
