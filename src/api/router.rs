//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{health, reservas};
use crate::auth::jwt::JwtConfig;
use crate::auth::middleware::{auth_middleware, AuthState};
use crate::domain::ReservaRepository;
use crate::infrastructure::database::repositories::SeaOrmReservaRepository;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Reservas
        reservas::list_reservas,
        reservas::create_reserva,
        reservas::delete_reserva,
    ),
    components(
        schemas(
            ApiResponse<String>,
            CreateReservaRequest,
            ReservaDto,
            health::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Comprobación del estado del servicio. Úsela para monitorización de disponibilidad (uptime, ping, readiness)."),
        (name = "Reservas", description = "Gestión de reservas de salas. Salas disponibles: `A`, `B`, `C`. Horario en formato de 12 horas (`hh:mm AM|PM`). No se permiten reservas los domingos. Cada usuario solo ve y cancela sus propias reservas."),
    ),
    info(
        title = "API de Reservas de Salas",
        version = "1.0.0",
        description = "REST API para la gestión de reservas de salas.

## Autenticación

Todas las rutas de `/reservas` requieren un JWT en el encabezado
`Authorization: Bearer <token>`, firmado con el secreto compartido del
servicio. Sin encabezado: 401. Token inválido o caducado: 403.

## Formato de respuestas

Todas las respuestas REST usan la envoltura estándar:
```json
{\"success\": true, \"data\": {...}}
```

En caso de error:
```json
{\"success\": false, \"error\": \"descripción del error\"}
```

## Reglas de validación

- `sala` debe ser `A`, `B` o `C`.
- `hora` debe seguir el formato `hh:mm AM|PM` (hora 01-12, minutos 00-59).
- `fecha` (`AAAA-MM-DD`) no puede caer en domingo.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt_config: JwtConfig) -> Router {
    let middleware_state = AuthState { jwt_config };

    let repo: Arc<dyn ReservaRepository> = Arc::new(SeaOrmReservaRepository::new(db));
    let reserva_state = reservas::ReservaAppState { repo };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Reserva routes (protected)
    let reserva_routes = Router::new()
        .route(
            "/",
            get(reservas::list_reservas).post(reservas::create_reserva),
        )
        .route("/{id}", delete(reservas::delete_reserva))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(reserva_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Reservas
        .nest("/reservas", reserva_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
