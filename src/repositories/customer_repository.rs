use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::utils::errors::AppError;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, customer: &Customer) -> Result<Customer, AppError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (
                ssn, first_name, last_name, street, city, state, zip_code,
                phone_number, email, password_hash, card_number, card_expiry,
                rating, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(&customer.ssn)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.street)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.zip_code)
        .bind(&customer.phone_number)
        .bind(&customer.email)
        .bind(&customer.password_hash)
        .bind(&customer.card_number)
        .bind(&customer.card_expiry)
        .bind(customer.rating)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, ssn: &str) -> Result<Option<Customer>, AppError> {
        let result = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE ssn = $1")
            .bind(ssn)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, AppError> {
        let result = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        let result =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn exists(&self, ssn: &str, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE ssn = $1 OR email = $2)",
        )
        .bind(ssn)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn email_in_use_by_other(&self, email: &str, ssn: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND ssn <> $2)",
        )
        .bind(email)
        .bind(ssn)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&self, customer: &Customer) -> Result<Customer, AppError> {
        let result = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, street = $4, city = $5,
                state = $6, zip_code = $7, phone_number = $8, email = $9,
                password_hash = $10, card_number = $11, card_expiry = $12,
                rating = $13, updated_at = $14
            WHERE ssn = $1
            RETURNING *
            "#,
        )
        .bind(&customer.ssn)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.street)
        .bind(&customer.city)
        .bind(&customer.state)
        .bind(&customer.zip_code)
        .bind(&customer.phone_number)
        .bind(&customer.email)
        .bind(&customer.password_hash)
        .bind(&customer.card_number)
        .bind(&customer.card_expiry)
        .bind(customer.rating)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, ssn: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE ssn = $1")
            .bind(ssn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
