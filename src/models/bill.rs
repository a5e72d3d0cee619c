//! Modelo de Bill
//!
//! Una factura finalizada de ride con invariantes temporales y
//! monetarios. La construcción se rechaza si algún invariante falla;
//! una vez persistida solo cambia el status.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::BILL_ID_REGEX;

/// Tarifa mínima facturable
pub const MINIMUM_FARE: Decimal = Decimal::ONE;

/// Rango permitido de distancia recorrida, en millas
pub const MIN_DISTANCE: f64 = 0.1;
pub const MAX_DISTANCE: f64 = 1000.0;

/// Estado de la transacción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Pending,
    Paid,
    Disputed,
    Refunded,
}

impl BillStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "disputed" => Some(Self::Disputed),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Disputed => "disputed",
            Self::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub bill_id: String,
    pub date: DateTime<Utc>,
    pub pickup_time: DateTime<Utc>,
    pub dropoff_time: DateTime<Utc>,
    pub distance_covered: f64,
    pub total_amount: Decimal,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub driver_id: String,
    pub customer_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    /// Duración del ride en minutos, derivada de pickup/dropoff
    pub fn duration_minutes(&self) -> i64 {
        (self.dropoff_time - self.pickup_time).num_seconds() / 60
    }
}

/// Validar los invariantes de una factura antes de persistirla
pub fn validate_new_bill(
    bill_id: &str,
    date: DateTime<Utc>,
    pickup_time: DateTime<Utc>,
    dropoff_time: DateTime<Utc>,
    distance_covered: f64,
    total_amount: Decimal,
) -> Result<(), AppError> {
    if !BILL_ID_REGEX.is_match(bill_id) {
        return Err(validation_error(
            "billId",
            "Bill ID must follow the BILL-XXXXXXXX format",
        ));
    }

    if date > Utc::now() {
        return Err(validation_error("date", "Bill date cannot be in the future"));
    }

    if dropoff_time <= pickup_time {
        return Err(validation_error(
            "dropoffTime",
            "Dropoff time must be after pickup time",
        ));
    }

    if !(MIN_DISTANCE..=MAX_DISTANCE).contains(&distance_covered) {
        return Err(validation_error(
            "distanceCovered",
            "Distance covered must be between 0.1 and 1000 miles",
        ));
    }

    if total_amount < MINIMUM_FARE {
        return Err(validation_error(
            "totalAmount",
            "Total amount cannot be below the minimum fare",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_args() -> (String, DateTime<Utc>, DateTime<Utc>, DateTime<Utc>, f64, Decimal) {
        let now = Utc::now();
        (
            "BILL-12345678".to_string(),
            now - Duration::hours(1),
            now - Duration::hours(2),
            now - Duration::minutes(90),
            5.3,
            Decimal::new(1825, 2), // 18.25
        )
    }

    #[test]
    fn test_valid_bill_passes() {
        let (id, date, pickup, dropoff, dist, total) = valid_args();
        assert!(validate_new_bill(&id, date, pickup, dropoff, dist, total).is_ok());
    }

    #[test]
    fn test_rejects_malformed_bill_id() {
        let (_, date, pickup, dropoff, dist, total) = valid_args();
        assert!(validate_new_bill("INV-12345678", date, pickup, dropoff, dist, total).is_err());
        assert!(validate_new_bill("BILL-1234", date, pickup, dropoff, dist, total).is_err());
    }

    #[test]
    fn test_rejects_future_date() {
        let (id, _, pickup, dropoff, dist, total) = valid_args();
        let future = Utc::now() + Duration::hours(1);
        assert!(validate_new_bill(&id, future, pickup, dropoff, dist, total).is_err());
    }

    #[test]
    fn test_rejects_dropoff_not_after_pickup() {
        let (id, date, pickup, _, dist, total) = valid_args();
        assert!(validate_new_bill(&id, date, pickup, pickup, dist, total).is_err());
        let before = pickup - Duration::minutes(5);
        assert!(validate_new_bill(&id, date, pickup, before, dist, total).is_err());
    }

    #[test]
    fn test_rejects_distance_out_of_range() {
        let (id, date, pickup, dropoff, _, total) = valid_args();
        assert!(validate_new_bill(&id, date, pickup, dropoff, 0.05, total).is_err());
        assert!(validate_new_bill(&id, date, pickup, dropoff, 1000.5, total).is_err());
        assert!(validate_new_bill(&id, date, pickup, dropoff, 0.1, total).is_ok());
        assert!(validate_new_bill(&id, date, pickup, dropoff, 1000.0, total).is_ok());
    }

    #[test]
    fn test_rejects_amount_below_minimum_fare() {
        let (id, date, pickup, dropoff, dist, _) = valid_args();
        let below = Decimal::new(99, 2); // 0.99
        assert!(validate_new_bill(&id, date, pickup, dropoff, dist, below).is_err());
        assert!(validate_new_bill(&id, date, pickup, dropoff, dist, MINIMUM_FARE).is_ok());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(BillStatus::parse("pending"), Some(BillStatus::Pending));
        assert_eq!(BillStatus::parse("paid"), Some(BillStatus::Paid));
        assert_eq!(BillStatus::parse("disputed"), Some(BillStatus::Disputed));
        assert_eq!(BillStatus::parse("refunded"), Some(BillStatus::Refunded));
        assert_eq!(BillStatus::parse("completed"), None);
    }

    #[test]
    fn test_duration_is_derived() {
        let now = Utc::now();
        let bill = Bill {
            bill_id: "BILL-12345678".to_string(),
            date: now,
            pickup_time: now - Duration::minutes(42),
            dropoff_time: now,
            distance_covered: 3.0,
            total_amount: Decimal::new(1200, 2),
            pickup_location: "A".to_string(),
            dropoff_location: "B".to_string(),
            driver_id: "987-65-4321".to_string(),
            customer_id: "123-45-6789".to_string(),
            status: "pending".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(bill.duration_minutes(), 42);
    }
}
