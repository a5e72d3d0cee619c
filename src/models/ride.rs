//! Modelo de Ride
//!
//! Un request de viaje con pickup/dropoff y la tarifa predicha por el
//! servicio externo. driver_id queda nulo hasta que un conductor acepta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ride {
    pub id: Uuid,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub pickup_address: String,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_address: String,
    pub date_time: DateTime<Utc>,
    pub passenger_count: i32,
    pub customer_id: String,
    pub driver_id: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
