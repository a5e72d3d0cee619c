use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ride::Ride;
use crate::utils::errors::AppError;

pub struct RideRepository {
    pool: PgPool,
}

impl RideRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, ride: &Ride) -> Result<Ride, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            r#"
            INSERT INTO rides (
                id, pickup_latitude, pickup_longitude, pickup_address,
                dropoff_latitude, dropoff_longitude, dropoff_address,
                date_time, passenger_count, customer_id, driver_id, price,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(ride.id)
        .bind(ride.pickup_latitude)
        .bind(ride.pickup_longitude)
        .bind(&ride.pickup_address)
        .bind(ride.dropoff_latitude)
        .bind(ride.dropoff_longitude)
        .bind(&ride.dropoff_address)
        .bind(ride.date_time)
        .bind(ride.passenger_count)
        .bind(&ride.customer_id)
        .bind(&ride.driver_id)
        .bind(ride.price)
        .bind(ride.created_at)
        .bind(ride.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ride>, AppError> {
        let result = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    /// Rides aún sin conductor asignado
    pub async fn list_unassigned(&self) -> Result<Vec<Ride>, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE driver_id IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_by_customer(&self, customer_id: &str) -> Result<Vec<Ride>, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_by_driver(&self, driver_id: &str) -> Result<Vec<Ride>, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE driver_id = $1 ORDER BY created_at DESC",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn assign_driver(
        &self,
        id: Uuid,
        driver_id: &str,
    ) -> Result<Option<Ride>, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET driver_id = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(driver_id)
        .bind(chrono::Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, ride: &Ride) -> Result<Ride, AppError> {
        let result = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET date_time = $2, passenger_count = $3, driver_id = $4,
                price = $5, updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ride.id)
        .bind(ride.date_time)
        .bind(ride.passenger_count)
        .bind(&ride.driver_id)
        .bind(ride.price)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
