use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::customer_dto::{
    CreateCustomerRequest, CustomerResponse, GenerateBillRequest, GenerateBillResponse,
    UpdateCustomerRequest,
};
use crate::dto::driver_dto::DriverResponse;
use crate::models::customer::Customer;
use crate::repositories::customer_repository::CustomerRepository;
use crate::services::location_service::LocationService;
use crate::state::{AppState, SessionToken};
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

/// Cotización flat-rate: base más tarifa por milla
const BASE_FARE: f64 = 5.0;
const PER_MILE: f64 = 2.5;

/// Radio por defecto para la búsqueda de conductores cercanos, en millas
const NEARBY_RADIUS_MILES: f64 = 10.0;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        if self.repository.exists(&request.ssn, &request.email).await? {
            return Err(AppError::Conflict("Customer already exists".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let now = Utc::now();
        let (card_number, card_expiry) = match request.credit_card {
            Some(card) => (Some(card.card_number), Some(card.card_expiry)),
            None => (None, None),
        };

        let customer = Customer {
            ssn: request.ssn,
            first_name: request.first_name,
            last_name: request.last_name,
            street: request.address.street,
            city: request.address.city,
            state: request.address.state,
            zip_code: request.address.zip_code,
            phone_number: request.phone_number,
            email: request.email,
            password_hash,
            card_number,
            card_expiry,
            rating: 0.0,
            created_at: now,
            updated_at: now,
        };

        let saved = self.repository.create(&customer).await?;
        Ok(saved.into())
    }

    pub async fn get_by_id(&self, ssn: &str) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(customer.into())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.list_all().await?;
        Ok(customers.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        ssn: &str,
        request: UpdateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        // El ssn es la identidad del registro, nunca se actualiza
        if request.ssn.is_some() {
            return Err(AppError::BadRequest(
                "Updating 'ssn' is not allowed".to_string(),
            ));
        }

        let mut current = self
            .repository
            .find_by_id(ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        if let Some(email) = request.email {
            if self.repository.email_in_use_by_other(&email, ssn).await? {
                return Err(AppError::Conflict("Email is already in use".to_string()));
            }
            current.email = email;
        }

        if let Some(password) = request.password {
            current.password_hash =
                hash(&password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;
        }

        if let Some(first_name) = request.first_name {
            current.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            current.last_name = last_name;
        }
        if let Some(address) = request.address {
            current.street = address.street;
            current.city = address.city;
            current.state = address.state;
            current.zip_code = address.zip_code;
        }
        if let Some(phone_number) = request.phone_number {
            current.phone_number = phone_number;
        }
        if let Some(card) = request.credit_card {
            current.card_number = Some(card.card_number);
            current.card_expiry = Some(card.card_expiry);
        }
        if let Some(rating) = request.rating {
            current.rating = rating;
        }

        let updated = self.repository.update(&current).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, ssn: &str) -> Result<(), AppError> {
        if !self.repository.delete(ssn).await? {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        state: &AppState,
    ) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let jwt_config = JwtConfig::from(&state.config);
        let token = generate_token(&user.ssn, &user.first_name, &user.email, "customer", &jwt_config)?;

        state
            .store_session(
                token.clone(),
                SessionToken::new(
                    user.ssn.clone(),
                    user.first_name.clone(),
                    user.email.clone(),
                    "customer".to_string(),
                    state.config.jwt_expiration,
                ),
            )
            .await;

        Ok(LoginResponse::success(user.ssn, token, user.first_name))
    }

    /// Cotización flat-rate para un ride ya realizado
    pub async fn generate_bill(
        &self,
        ssn: &str,
        request: GenerateBillRequest,
    ) -> Result<GenerateBillResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        if request.distance <= 0.0 {
            return Err(AppError::BadRequest("Invalid ride distance".to_string()));
        }

        let total = BASE_FARE + request.distance * PER_MILE;

        Ok(GenerateBillResponse {
            customer_id: customer.ssn,
            ride_id: request.ride_id,
            amount: format!("{:.2}", total),
            date: Utc::now(),
        })
    }

    /// Conductores disponibles cerca del cliente
    pub async fn nearby_drivers(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        state: &AppState,
    ) -> Result<Vec<DriverResponse>, AppError> {
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(AppError::BadRequest("Missing coordinates".to_string())),
        };

        let location_service = LocationService::new(state.pool.clone(), state.redis.clone());
        let drivers = location_service
            .find_drivers_within_radius_with_cache(latitude, longitude, NEARBY_RADIUS_MILES)
            .await?;

        Ok(drivers.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_rate_formula() {
        // base 5 + 2.5 por milla, redondeado a centavos
        let total = BASE_FARE + 4.2 * PER_MILE;
        assert_eq!(format!("{:.2}", total), "15.50");
    }
}
