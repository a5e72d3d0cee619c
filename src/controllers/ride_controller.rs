use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::ride_dto::{
    AssignRideRequest, CreateRideRequest, RideResponse, UpdateRideRequest,
};
use crate::events::{ride_events, topics};
use crate::models::ride::Ride;
use crate::repositories::ride_repository::RideRepository;
use crate::services::location_service::LocationService;
use crate::services::pricing_service::FareRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::geo::{is_within_radius, DistanceUnit};

/// Radio de matching para rides y conductores cercanos, en millas
const NEARBY_RADIUS_MILES: f64 = 10.0;

pub struct RideController {
    repository: RideRepository,
}

impl RideController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RideRepository::new(pool),
        }
    }

    /// Crear un ride request: predice la tarifa, persiste y publica
    /// ride.requested. El 202 de la ruta refleja que el matching sigue
    /// en curso cuando la respuesta sale.
    pub async fn create(
        &self,
        request: CreateRideRequest,
        state: &AppState,
    ) -> Result<(), AppError> {
        let (customer_id, pickup, dropoff, date_time, passenger_count) = match (
            request.customer_id,
            request.pickup_location,
            request.dropoff_location,
            request.date_time,
            request.passenger_count,
        ) {
            (Some(c), Some(p), Some(d), Some(t), Some(n)) => (c, p, d, t, n),
            _ => {
                return Err(AppError::BadRequest(
                    "Missing required ride information".to_string(),
                ));
            }
        };

        if passenger_count < 1 {
            return Err(AppError::BadRequest("Invalid passenger count".to_string()));
        }

        let predicted_fare = state
            .pricing
            .calculate_ride_price(&FareRequest {
                pickup_latitude: pickup.latitude,
                pickup_longitude: pickup.longitude,
                dropoff_latitude: dropoff.latitude,
                dropoff_longitude: dropoff.longitude,
                passenger_count,
                pickup_datetime: date_time,
            })
            .await?;

        let price = Decimal::from_f64_retain(predicted_fare)
            .ok_or_else(|| AppError::Internal("Invalid predicted fare".to_string()))?;

        let now = Utc::now();
        let ride = Ride {
            id: Uuid::new_v4(),
            pickup_latitude: pickup.latitude,
            pickup_longitude: pickup.longitude,
            pickup_address: pickup.address,
            dropoff_latitude: dropoff.latitude,
            dropoff_longitude: dropoff.longitude,
            dropoff_address: dropoff.address,
            date_time,
            passenger_count,
            customer_id,
            driver_id: None,
            price,
            created_at: now,
            updated_at: now,
        };

        let saved = self.repository.create(&ride).await?;

        state
            .events
            .publish(
                topics::RIDE_REQUESTED,
                ride_events::CREATED,
                &saved.id.to_string(),
                json!({
                    "rideId": saved.id,
                    "customerId": saved.customer_id,
                    "price": saved.price,
                    "dateTime": saved.date_time,
                }),
            )
            .await;

        Ok(())
    }

    /// Rides sin conductor cuyo pickup cae dentro del radio
    pub async fn nearby_rides(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Vec<RideResponse>, AppError> {
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => {
                return Err(AppError::BadRequest(
                    "Latitude and longitude are required".to_string(),
                ));
            }
        };

        let rides = self.repository.list_unassigned().await?;

        let nearby = rides
            .into_iter()
            .filter(|ride| {
                is_within_radius(
                    latitude,
                    longitude,
                    ride.pickup_latitude,
                    ride.pickup_longitude,
                    NEARBY_RADIUS_MILES,
                    DistanceUnit::Miles,
                )
            })
            .map(Into::into)
            .collect();

        Ok(nearby)
    }

    pub async fn assign(
        &self,
        id: Uuid,
        request: AssignRideRequest,
        state: &AppState,
    ) -> Result<(), AppError> {
        let ride = self
            .repository
            .assign_driver(id, &request.driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

        state
            .events
            .publish(
                topics::RIDE_ASSIGNED,
                ride_events::ACCEPTED,
                &ride.id.to_string(),
                json!({
                    "rideId": ride.id,
                    "customerId": ride.customer_id,
                    "driverId": ride.driver_id,
                }),
            )
            .await;

        Ok(())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRideRequest,
        state: &AppState,
    ) -> Result<RideResponse, AppError> {
        let mut current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

        if let Some(date_time) = request.date_time {
            current.date_time = date_time;
        }
        if let Some(passenger_count) = request.passenger_count {
            if passenger_count < 1 {
                return Err(AppError::BadRequest("Invalid passenger count".to_string()));
            }
            current.passenger_count = passenger_count;
        }
        if let Some(driver_id) = request.driver_id {
            current.driver_id = Some(driver_id);
        }
        if let Some(price) = request.price {
            current.price = Decimal::from_f64_retain(price)
                .ok_or_else(|| AppError::BadRequest("Invalid price".to_string()))?;
        }

        let updated = self.repository.update(&current).await?;

        state
            .events
            .publish(
                topics::RIDE_UPDATED,
                ride_events::UPDATED,
                &updated.id.to_string(),
                json!({
                    "rideId": updated.id,
                    "customerId": updated.customer_id,
                    "driverId": updated.driver_id,
                }),
            )
            .await;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Ride not found".to_string()));
        }
        Ok(())
    }

    pub async fn customer_rides(&self, customer_id: &str) -> Result<Vec<RideResponse>, AppError> {
        let rides = self.repository.list_by_customer(customer_id).await?;

        if rides.is_empty() {
            return Err(AppError::NotFound(
                "No rides found for this customer".to_string(),
            ));
        }

        Ok(rides.into_iter().map(Into::into).collect())
    }

    pub async fn driver_rides(&self, driver_id: &str) -> Result<Vec<RideResponse>, AppError> {
        let rides = self.repository.list_by_driver(driver_id).await?;

        if rides.is_empty() {
            return Err(AppError::NotFound(
                "No rides found for this driver".to_string(),
            ));
        }

        Ok(rides.into_iter().map(Into::into).collect())
    }

    /// Conductores disponibles cerca de una coordenada, con cache
    pub async fn nearby_drivers(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        state: &AppState,
    ) -> Result<Vec<crate::dto::driver_dto::DriverResponse>, AppError> {
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => {
                return Err(AppError::BadRequest(
                    "Both latitude and longitude are required".to_string(),
                ));
            }
        };

        let location_service = LocationService::new(state.pool.clone(), state.redis.clone());
        let drivers = location_service
            .find_drivers_within_radius_with_cache(latitude, longitude, NEARBY_RADIUS_MILES)
            .await?;

        Ok(drivers.into_iter().map(Into::into).collect())
    }
}
