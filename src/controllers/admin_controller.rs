use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::admin_dto::{AdminResponse, CreateAdminRequest, UpdateAdminRequest};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::admin::Admin;
use crate::repositories::admin_repository::AdminRepository;
use crate::state::{AppState, SessionToken};
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

/// Reglas de la cuenta de administrador. La gestión de clientes,
/// conductores y facturas desde el panel de admin reutiliza los
/// controllers de cada dominio.
pub struct AdminController {
    repository: AdminRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AdminRepository::new(pool),
        }
    }

    pub async fn signup(&self, request: CreateAdminRequest) -> Result<AdminResponse, AppError> {
        request.validate()?;

        if self.repository.exists(&request.ssn, &request.email).await? {
            return Err(AppError::Conflict("Admin already exists".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let now = Utc::now();
        let admin = Admin {
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
            created_at: now,
            updated_at: now,
        };

        let saved = self.repository.create(&admin).await?;
        Ok(saved.into())
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
        let token = generate_token(&user.ssn, &user.first_name, &user.email, "admin", &jwt_config)?;

        state
            .store_session(
                token.clone(),
                SessionToken::new(
                    user.ssn.clone(),
                    user.first_name.clone(),
                    user.email.clone(),
                    "admin".to_string(),
                    state.config.jwt_expiration,
                ),
            )
            .await;

        Ok(LoginResponse::success(user.ssn, token, user.first_name))
    }

    pub async fn update(
        &self,
        ssn: &str,
        request: UpdateAdminRequest,
    ) -> Result<AdminResponse, AppError> {
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
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

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

        let updated = self.repository.update(&current).await?;
        Ok(updated.into())
    }
}
