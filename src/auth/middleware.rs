//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::jwt::{verify_token, AuthError, Claims, JwtConfig};
use crate::api::dto::ApiResponse;

/// Authentication state containing the JWT config.
///
/// The verification secret is injected here at startup and read-only for
/// the life of the process.
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user information derived from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

/// Extract the token from an Authorization header value.
///
/// Only the portion after the first space is used; a value without a space
/// carries no token at all.
fn extract_token(auth_header: &str) -> Option<&str> {
    match auth_header.split_once(' ') {
        Some((_, token)) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// JWT authentication middleware - requires valid token
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    // No token after the scheme counts as no credential at all
    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::MissingToken);
    };

    // Verify JWT token
    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            // Add authenticated user to request extensions
            let user = AuthenticatedUser::from_claims(claims);
            request.extensions_mut().insert(user);

            next.run(request).await
        }
        Err(_) => auth_error_response(AuthError::InvalidToken),
    }
}

/// Create an authentication error response
fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "No autorizado"),
        AuthError::InvalidToken => (StatusCode::FORBIDDEN, "Token inválido"),
    };

    let body = Json(ApiResponse::<()>::error(message));

    (status, body).into_response()
}
