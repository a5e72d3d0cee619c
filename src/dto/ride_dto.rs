//! DTOs de Ride

use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ride::Ride;

/// Punto de pickup/dropoff con dirección legible
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidePointDto {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Request de creación de ride. Los campos son opcionales para poder
/// responder el 400 agregado "Missing required ride information".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRideRequest {
    pub customer_id: Option<String>,
    pub pickup_location: Option<RidePointDto>,
    pub dropoff_location: Option<RidePointDto>,
    pub date_time: Option<DateTime<Utc>>,
    // El contrato histórico usa snake_case solo para este campo
    #[serde(rename = "passenger_count")]
    pub passenger_count: Option<i32>,
}

/// Request de asignación de conductor
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRideRequest {
    pub driver_id: String,
}

/// Request de actualización parcial de un ride
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRideRequest {
    pub date_time: Option<DateTime<Utc>>,
    #[serde(rename = "passenger_count")]
    pub passenger_count: Option<i32>,
    pub driver_id: Option<String>,
    pub price: Option<f64>,
}

/// Query de búsqueda por cercanía
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response de ride
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideResponse {
    pub id: Uuid,
    pub pickup_location: RidePointDto,
    pub dropoff_location: RidePointDto,
    pub date_time: DateTime<Utc>,
    #[serde(rename = "passenger_count")]
    pub passenger_count: i32,
    pub customer_id: String,
    pub driver_id: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ride> for RideResponse {
    fn from(ride: Ride) -> Self {
        Self {
            id: ride.id,
            pickup_location: RidePointDto {
                latitude: ride.pickup_latitude,
                longitude: ride.pickup_longitude,
                address: ride.pickup_address,
            },
            dropoff_location: RidePointDto {
                latitude: ride.dropoff_latitude,
                longitude: ride.dropoff_longitude,
                address: ride.dropoff_address,
            },
            date_time: ride.date_time,
            passenger_count: ride.passenger_count,
            customer_id: ride.customer_id,
            driver_id: ride.driver_id,
            price: ride.price.to_f64().unwrap_or(0.0),
            created_at: ride.created_at,
            updated_at: ride.updated_at,
        }
    }
}
