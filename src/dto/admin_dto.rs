//! DTOs de Admin

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AddressDto;
use crate::models::admin::Admin;
use crate::utils::validation::SSN_REGEX;

/// Request de signup de administrador
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    #[validate(regex(
        path = "SSN_REGEX",
        message = "Please enter a valid SSN in format XXX-XX-XXXX"
    ))]
    pub ssn: String,

    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate]
    pub address: AddressDto,

    #[validate(length(min = 7, max = 20))]
    pub phone_number: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,
}

/// Request para actualizar un administrador; el ssn es inmutable
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    pub ssn: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[validate]
    pub address: Option<AddressDto>,

    #[validate(length(min = 7, max = 20))]
    pub phone_number: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8))]
    pub password: Option<String>,
}

/// Response de administrador (sin password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
    pub address: AddressDto,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            ssn: admin.ssn,
            first_name: admin.first_name,
            last_name: admin.last_name,
            address: AddressDto {
                street: admin.street,
                city: admin.city,
                state: admin.state,
                zip_code: admin.zip_code,
            },
            phone_number: admin.phone_number,
            email: admin.email,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}
