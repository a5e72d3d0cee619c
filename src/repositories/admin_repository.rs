use sqlx::PgPool;

use crate::models::admin::Admin;
use crate::utils::errors::AppError;

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, admin: &Admin) -> Result<Admin, AppError> {
        let result = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (
                ssn, first_name, last_name, street, city, state, zip_code,
                phone_number, email, password_hash, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&admin.ssn)
        .bind(&admin.first_name)
        .bind(&admin.last_name)
        .bind(&admin.street)
        .bind(&admin.city)
        .bind(&admin.state)
        .bind(&admin.zip_code)
        .bind(&admin.phone_number)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, ssn: &str) -> Result<Option<Admin>, AppError> {
        let result = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE ssn = $1")
            .bind(ssn)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let result = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn exists(&self, ssn: &str, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM admins WHERE ssn = $1 OR email = $2)")
                .bind(ssn)
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn email_in_use_by_other(&self, email: &str, ssn: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1 AND ssn <> $2)",
        )
        .bind(email)
        .bind(ssn)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&self, admin: &Admin) -> Result<Admin, AppError> {
        let result = sqlx::query_as::<_, Admin>(
            r#"
            UPDATE admins
            SET first_name = $2, last_name = $3, street = $4, city = $5,
                state = $6, zip_code = $7, phone_number = $8, email = $9,
                password_hash = $10, updated_at = $11
            WHERE ssn = $1
            RETURNING *
            "#,
        )
        .bind(&admin.ssn)
        .bind(&admin.first_name)
        .bind(&admin.last_name)
        .bind(&admin.street)
        .bind(&admin.city)
        .bind(&admin.state)
        .bind(&admin.zip_code)
        .bind(&admin.phone_number)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
