//! DTOs de Customer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AddressDto;
use crate::models::customer::Customer;
use crate::utils::validation::SSN_REGEX;

/// Tarjeta de crédito en archivo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardDto {
    #[validate(length(min = 12, max = 19))]
    pub card_number: String,

    #[validate(length(min = 4, max = 7))]
    pub card_expiry: String,
}

/// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
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

    #[validate]
    pub credit_card: Option<CreditCardDto>,
}

/// Request para actualizar un cliente. El ssn es inmutable: si viene en
/// el body la operación se rechaza.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
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

    #[validate]
    pub credit_card: Option<CreditCardDto>,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

/// Response de cliente (sin password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
    pub address: AddressDto,
    pub phone_number: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardDto>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let credit_card = match (customer.card_number, customer.card_expiry) {
            (Some(card_number), Some(card_expiry)) => Some(CreditCardDto {
                card_number,
                card_expiry,
            }),
            _ => None,
        };

        Self {
            ssn: customer.ssn,
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: AddressDto {
                street: customer.street,
                city: customer.city,
                state: customer.state,
                zip_code: customer.zip_code,
            },
            phone_number: customer.phone_number,
            email: customer.email,
            credit_card,
            rating: customer.rating,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// Request para generar una cotización flat-rate de un ride
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBillRequest {
    pub ride_id: Option<String>,
    pub distance: f64,
}

/// Cotización flat-rate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBillResponse {
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_id: Option<String>,
    pub amount: String,
    pub date: DateTime<Utc>,
}
