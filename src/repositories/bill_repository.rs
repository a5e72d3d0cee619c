use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::billing_dto::BillFilters;
use crate::models::bill::Bill;
use crate::utils::errors::AppError;

pub struct BillRepository {
    pool: PgPool,
}

impl BillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bill: &Bill) -> Result<Bill, AppError> {
        let result = sqlx::query_as::<_, Bill>(
            r#"
            INSERT INTO bills (
                bill_id, date, pickup_time, dropoff_time, distance_covered,
                total_amount, pickup_location, dropoff_location, driver_id,
                customer_id, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&bill.bill_id)
        .bind(bill.date)
        .bind(bill.pickup_time)
        .bind(bill.dropoff_time)
        .bind(bill.distance_covered)
        .bind(bill.total_amount)
        .bind(&bill.pickup_location)
        .bind(&bill.dropoff_location)
        .bind(&bill.driver_id)
        .bind(&bill.customer_id)
        .bind(&bill.status)
        .bind(bill.created_at)
        .bind(bill.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, bill_id: &str) -> Result<Option<Bill>, AppError> {
        let result = sqlx::query_as::<_, Bill>("SELECT * FROM bills WHERE bill_id = $1")
            .bind(bill_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn bill_id_exists(&self, bill_id: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM bills WHERE bill_id = $1)")
                .bind(bill_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Búsqueda con filtros opcionales, más reciente primero
    pub async fn list_filtered(&self, filters: &BillFilters) -> Result<Vec<Bill>, AppError> {
        let min_amount = filters.min_amount.and_then(Decimal::from_f64_retain);
        let max_amount = filters.max_amount.and_then(Decimal::from_f64_retain);
        let start_date = filters
            .start_date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());
        let end_date = filters
            .end_date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());

        let result = sqlx::query_as::<_, Bill>(
            r#"
            SELECT * FROM bills
            WHERE ($1::text IS NULL OR bill_id = $1)
              AND ($2::text IS NULL OR customer_id = $2)
              AND ($3::text IS NULL OR driver_id = $3)
              AND ($4::numeric IS NULL OR total_amount >= $4)
              AND ($5::numeric IS NULL OR total_amount <= $5)
              AND ($6::timestamptz IS NULL OR date >= $6)
              AND ($7::timestamptz IS NULL OR date <= $7)
              AND ($8::text IS NULL OR status = $8)
            ORDER BY date DESC
            "#,
        )
        .bind(&filters.bill_id)
        .bind(&filters.customer_id)
        .bind(&filters.driver_id)
        .bind(min_amount)
        .bind(max_amount)
        .bind(start_date)
        .bind(end_date)
        .bind(&filters.status)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}
