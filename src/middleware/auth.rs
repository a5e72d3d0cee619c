//! Middleware de autenticación JWT
//!
//! Valida el bearer token contra la firma y contra el registro de
//! sesiones activas: un token emitido deja de servir en cuanto su
//! sesión se cierra, aunque la firma siga siendo válida.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub ssn: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Middleware que exige una sesión activa
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    if !state.session_active(token).await {
        return Err(AppError::Unauthorized(
            "Session is no longer active".to_string(),
        ));
    }

    let authenticated_user = AuthenticatedUser {
        ssn: claims.sub,
        name: claims.name,
        email: claims.email,
        role: claims.role,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Cerrar la sesión asociada al bearer token de la request.
/// Falla con 401 si no hay token, la firma no valida, o la sesión ya
/// fue cerrada (un logout repetido no es idempotente a propósito).
pub async fn end_bearer_session(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    verify_token(token, &JwtConfig::from(&state.config))?;

    if !state.end_session(token).await {
        return Err(AppError::Unauthorized(
            "Session already closed or expired".to_string(),
        ));
    }

    Ok(())
}
