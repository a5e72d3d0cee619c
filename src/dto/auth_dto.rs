//! DTOs de autenticación
//!
//! Login/logout comparten forma entre customers, drivers y admins.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Respuesta de login exitoso
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub id: String,
    pub token: String,
    pub name: String,
}

impl LoginResponse {
    pub fn success(id: String, token: String, name: String) -> Self {
        Self {
            message: "Login successful".to_string(),
            id,
            token,
            name,
        }
    }
}
