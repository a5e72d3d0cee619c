use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::driver_dto::{
    CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest,
    UpdateDriverStatusRequest,
};
use crate::events::{driver_events, topics};
use crate::models::driver::{Driver, DriverStatus};
use crate::repositories::driver_repository::DriverRepository;
use crate::state::{AppState, SessionToken};
use crate::utils::errors::{validation_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_car_year, validate_coordinates};

const DEFAULT_RATING: f64 = 5.0;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn signup(&self, request: CreateDriverRequest) -> Result<DriverResponse, AppError> {
        request.validate()?;

        if validate_car_year(request.car_details.year).is_err() {
            return Err(validation_error(
                "carYear",
                "Car year must be between 2000 and next year",
            ));
        }

        if self.repository.exists(&request.ssn, &request.email).await? {
            return Err(AppError::Conflict(
                "Driver ID or email already exists".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let now = Utc::now();
        let driver = Driver {
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
            car_make: request.car_details.make,
            car_model: request.car_details.model,
            car_year: request.car_details.year,
            rating: request.rating.unwrap_or(DEFAULT_RATING),
            status: DriverStatus::Unavailable.as_str().to_string(),
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.repository.create(&driver).await?;
        Ok(saved.into())
    }

    pub async fn get_by_id(&self, ssn: &str) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver.into())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver.into())
    }

    pub async fn list(&self, filters: &DriverFilters) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.repository.list_filtered(filters).await?;
        Ok(drivers.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        ssn: &str,
        request: UpdateDriverRequest,
    ) -> Result<DriverResponse, AppError> {
        request.validate()?;

        if request.ssn.is_some() {
            return Err(AppError::BadRequest(
                "Updating 'ssn' is not allowed".to_string(),
            ));
        }

        let mut current = self
            .repository
            .find_by_id(ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

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
        if let Some(car_details) = request.car_details {
            if validate_car_year(car_details.year).is_err() {
                return Err(validation_error(
                    "carYear",
                    "Car year must be between 2000 and next year",
                ));
            }
            current.car_make = car_details.make;
            current.car_model = car_details.model;
            current.car_year = car_details.year;
        }
        if let Some(rating) = request.rating {
            current.rating = rating;
        }

        let updated = self.repository.update(&current).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, ssn: &str) -> Result<(), AppError> {
        if !self.repository.delete(ssn).await? {
            return Err(AppError::NotFound("Driver not found".to_string()));
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
        let token = generate_token(&user.ssn, &user.first_name, &user.email, "driver", &jwt_config)?;

        state
            .store_session(
                token.clone(),
                SessionToken::new(
                    user.ssn.clone(),
                    user.first_name.clone(),
                    user.email.clone(),
                    "driver".to_string(),
                    state.config.jwt_expiration,
                ),
            )
            .await;

        Ok(LoginResponse::success(user.ssn, token, user.first_name))
    }

    /// Actualización parcial de estado y ubicación. Un cambio de estado
    /// publica el evento driver.available / driver.unavailable.
    pub async fn update_status(
        &self,
        ssn: &str,
        request: UpdateDriverStatusRequest,
        state: &AppState,
    ) -> Result<DriverResponse, AppError> {
        let new_status = match request.status.as_deref() {
            Some(value) => match DriverStatus::parse(value) {
                Some(status) => Some(status),
                None => {
                    return Err(AppError::BadRequest("Invalid status value".to_string()));
                }
            },
            None => None,
        };

        let location = match request.current_location {
            Some(location) => {
                if validate_coordinates(location.latitude, location.longitude).is_err() {
                    return Err(AppError::BadRequest(
                        "Invalid latitude or longitude".to_string(),
                    ));
                }
                Some(location)
            }
            None => None,
        };

        let previous = self
            .repository
            .find_by_id(ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let updated = self
            .repository
            .update_status_location(
                ssn,
                new_status.map(|s| s.as_str()),
                location.map(|l| l.latitude),
                location.map(|l| l.longitude),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        if let Some(status) = new_status {
            if previous.status != status.as_str() {
                let event = match status {
                    DriverStatus::Available => driver_events::AVAILABLE,
                    DriverStatus::Unavailable => driver_events::UNAVAILABLE,
                };
                state
                    .events
                    .publish(
                        topics::DRIVER_LOCATIONS,
                        event,
                        &updated.ssn,
                        json!({
                            "driverId": updated.ssn,
                            "status": updated.status,
                            "latitude": updated.latitude,
                            "longitude": updated.longitude,
                        }),
                    )
                    .await;
            }
        }

        if location.is_some() {
            state
                .events
                .publish(
                    topics::DRIVER_LOCATIONS,
                    driver_events::LOCATION_UPDATED,
                    &updated.ssn,
                    json!({
                        "driverId": updated.ssn,
                        "latitude": updated.latitude,
                        "longitude": updated.longitude,
                    }),
                )
                .await;
        }

        Ok(updated.into())
    }
}
