//! DTOs de Driver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{AddressDto, LocationDto};
use crate::models::driver::Driver;
use crate::utils::validation::{PHONE_REGEX, SSN_REGEX};

/// Detalles del vehículo del conductor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailsDto {
    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    pub year: i32,
}

/// Request de signup de conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
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

    #[validate(regex(
        path = "PHONE_REGEX",
        message = "Phone must be +1 followed by 10 digits"
    ))]
    pub phone_number: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,

    #[validate]
    pub car_details: CarDetailsDto,

    #[validate(range(min = 1.0, max = 5.0))]
    pub rating: Option<f64>,
}

/// Request para actualizar un conductor; el ssn es inmutable
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    pub ssn: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[validate]
    pub address: Option<AddressDto>,

    #[validate(regex(
        path = "PHONE_REGEX",
        message = "Phone must be +1 followed by 10 digits"
    ))]
    pub phone_number: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8))]
    pub password: Option<String>,

    #[validate]
    pub car_details: Option<CarDetailsDto>,

    #[validate(range(min = 1.0, max = 5.0))]
    pub rating: Option<f64>,
}

/// Request de actualización parcial de estado/ubicación
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverStatusRequest {
    pub status: Option<String>,
    pub current_location: Option<LocationDto>,
}

/// Filtros de búsqueda de conductores. Los campos de texto hacen match
/// por substring; zip, teléfono y año son exactos; rating es un mínimo.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverFilters {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
    pub min_rating: Option<f64>,
}

/// Response de conductor (sin password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
    pub address: AddressDto,
    pub phone_number: String,
    pub email: String,
    pub car_details: CarDetailsDto,
    pub rating: f64,
    pub status: String,
    pub current_location: Option<LocationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        let current_location = match (driver.latitude, driver.longitude) {
            (Some(latitude), Some(longitude)) => Some(LocationDto {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Self {
            ssn: driver.ssn,
            first_name: driver.first_name,
            last_name: driver.last_name,
            address: AddressDto {
                street: driver.street,
                city: driver.city,
                state: driver.state,
                zip_code: driver.zip_code,
            },
            phone_number: driver.phone_number,
            email: driver.email,
            car_details: CarDetailsDto {
                make: driver.car_make,
                model: driver.car_model,
                year: driver.car_year,
            },
            rating: driver.rating,
            status: driver.status,
            current_location,
            created_at: driver.created_at,
            updated_at: driver.updated_at,
        }
    }
}
