use sqlx::PgPool;

use crate::dto::driver_dto::DriverFilters;
use crate::models::driver::Driver;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, driver: &Driver) -> Result<Driver, AppError> {
        let result = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (
                ssn, first_name, last_name, street, city, state, zip_code,
                phone_number, email, password_hash, car_make, car_model,
                car_year, rating, status, latitude, longitude, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(&driver.ssn)
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.street)
        .bind(&driver.city)
        .bind(&driver.state)
        .bind(&driver.zip_code)
        .bind(&driver.phone_number)
        .bind(&driver.email)
        .bind(&driver.password_hash)
        .bind(&driver.car_make)
        .bind(&driver.car_model)
        .bind(driver.car_year)
        .bind(driver.rating)
        .bind(&driver.status)
        .bind(driver.latitude)
        .bind(driver.longitude)
        .bind(driver.created_at)
        .bind(driver.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, ssn: &str) -> Result<Option<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE ssn = $1")
            .bind(ssn)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    /// Búsqueda con filtros opcionales: substring en los campos de texto,
    /// match exacto en zip/teléfono/año, mínimo en rating.
    pub async fn list_filtered(&self, filters: &DriverFilters) -> Result<Vec<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE ($1::text IS NULL OR first_name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR last_name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR city ILIKE '%' || $3 || '%')
              AND ($4::text IS NULL OR state ILIKE '%' || $4 || '%')
              AND ($5::text IS NULL OR zip_code = $5)
              AND ($6::text IS NULL OR phone_number = $6)
              AND ($7::text IS NULL OR email ILIKE '%' || $7 || '%')
              AND ($8::text IS NULL OR car_make ILIKE '%' || $8 || '%')
              AND ($9::text IS NULL OR car_model ILIKE '%' || $9 || '%')
              AND ($10::int4 IS NULL OR car_year = $10)
              AND ($11::float8 IS NULL OR rating >= $11)
            ORDER BY created_at DESC
            "#,
        )
        .bind(&filters.first_name)
        .bind(&filters.last_name)
        .bind(&filters.city)
        .bind(&filters.state)
        .bind(&filters.zip_code)
        .bind(&filters.phone_number)
        .bind(&filters.email)
        .bind(&filters.car_make)
        .bind(&filters.car_model)
        .bind(filters.car_year)
        .bind(filters.min_rating)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    /// Conductores disponibles con ubicación reportada
    pub async fn list_available(&self) -> Result<Vec<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE status = 'available'
              AND latitude IS NOT NULL
              AND longitude IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn exists(&self, ssn: &str, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE ssn = $1 OR email = $2)",
        )
        .bind(ssn)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn email_in_use_by_other(&self, email: &str, ssn: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE email = $1 AND ssn <> $2)",
        )
        .bind(email)
        .bind(ssn)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&self, driver: &Driver) -> Result<Driver, AppError> {
        let result = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET first_name = $2, last_name = $3, street = $4, city = $5,
                state = $6, zip_code = $7, phone_number = $8, email = $9,
                password_hash = $10, car_make = $11, car_model = $12,
                car_year = $13, rating = $14, updated_at = $15
            WHERE ssn = $1
            RETURNING *
            "#,
        )
        .bind(&driver.ssn)
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.street)
        .bind(&driver.city)
        .bind(&driver.state)
        .bind(&driver.zip_code)
        .bind(&driver.phone_number)
        .bind(&driver.email)
        .bind(&driver.password_hash)
        .bind(&driver.car_make)
        .bind(&driver.car_model)
        .bind(driver.car_year)
        .bind(driver.rating)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    /// Actualización parcial de estado y ubicación
    pub async fn update_status_location(
        &self,
        ssn: &str,
        status: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Driver>, AppError> {
        let result = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET status = COALESCE($2, status),
                latitude = COALESCE($3, latitude),
                longitude = COALESCE($4, longitude),
                updated_at = $5
            WHERE ssn = $1
            RETURNING *
            "#,
        )
        .bind(ssn)
        .bind(status)
        .bind(latitude)
        .bind(longitude)
        .bind(chrono::Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, ssn: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE ssn = $1")
            .bind(ssn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
