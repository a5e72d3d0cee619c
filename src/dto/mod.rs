//! DTOs
//!
//! Tipos de request/response de la API. El wire format es camelCase,
//! separado de los modelos de fila.

pub mod admin_dto;
pub mod auth_dto;
pub mod billing_dto;
pub mod customer_dto;
pub mod driver_dto;
pub mod ride_dto;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::ZIP_CODE_REGEX;

/// Respuesta genérica con solo un mensaje
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Dirección postal embebida en customers, drivers y admins
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[validate(length(min = 1, max = 100))]
    pub street: String,

    #[validate(length(min = 1, max = 50))]
    pub city: String,

    #[validate(length(equal = 2, message = "State must be a 2-letter code"))]
    pub state: String,

    #[validate(regex(path = "ZIP_CODE_REGEX", message = "Please enter a valid zip code"))]
    pub zip_code: String,
}

/// Coordenada geográfica en el wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
}
