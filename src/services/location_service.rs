//! Servicio de ubicación
//!
//! Búsqueda de conductores disponibles dentro de un radio, con cache
//! Redis de 60 segundos. Si Redis no está disponible se degrada a la
//! query directa.

use sqlx::PgPool;
use tracing::{debug, warn};

use crate::cache::redis_client::RedisClient;
use crate::cache::CacheOperations;
use crate::models::driver::Driver;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::AppError;
use crate::utils::geo::{is_within_radius, DistanceUnit};

const NEARBY_CACHE_TTL_SECS: u64 = 60;

pub struct LocationService {
    repository: DriverRepository,
    redis: Option<RedisClient>,
}

impl LocationService {
    pub fn new(pool: PgPool, redis: Option<RedisClient>) -> Self {
        Self {
            repository: DriverRepository::new(pool),
            redis,
        }
    }

    /// Conductores disponibles dentro del radio, query directa
    pub async fn find_drivers_within_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius_miles: f64,
    ) -> Result<Vec<Driver>, AppError> {
        let drivers = self.repository.list_available().await?;
        Ok(filter_within_radius(drivers, latitude, longitude, radius_miles))
    }

    /// Variante con cache: lee el resultado cacheado para la clave
    /// (lat, lng, radio) y lo refresca con TTL de 60 segundos. Cualquier
    /// fallo de Redis degrada a la query directa.
    pub async fn find_drivers_within_radius_with_cache(
        &self,
        latitude: f64,
        longitude: f64,
        radius_miles: f64,
    ) -> Result<Vec<Driver>, AppError> {
        let Some(redis) = &self.redis else {
            warn!("Redis no conectado, usando query directa");
            return self
                .find_drivers_within_radius(latitude, longitude, radius_miles)
                .await;
        };

        let cache_key = redis.nearby_drivers_key(latitude, longitude, radius_miles);

        if let Ok(Some(cached)) = redis.get::<Vec<Driver>>(&cache_key).await {
            debug!("Cache hit para conductores cercanos");
            return Ok(cached);
        }

        let fresh = self
            .find_drivers_within_radius(latitude, longitude, radius_miles)
            .await?;

        if let Err(e) = redis.set(&cache_key, &fresh, NEARBY_CACHE_TTL_SECS).await {
            warn!("⚠️ No se pudo cachear conductores cercanos: {}", e);
        }

        Ok(fresh)
    }
}

fn filter_within_radius(
    drivers: Vec<Driver>,
    latitude: f64,
    longitude: f64,
    radius_miles: f64,
) -> Vec<Driver> {
    drivers
        .into_iter()
        .filter(|driver| match (driver.latitude, driver.longitude) {
            (Some(lat), Some(lng)) => is_within_radius(
                latitude,
                longitude,
                lat,
                lng,
                radius_miles,
                DistanceUnit::Miles,
            ),
            _ => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn driver_at(ssn: &str, latitude: Option<f64>, longitude: Option<f64>) -> Driver {
        let now = Utc::now();
        Driver {
            ssn: ssn.to_string(),
            first_name: "Test".to_string(),
            last_name: "Driver".to_string(),
            street: "1 Main St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            phone_number: "+12125550100".to_string(),
            email: format!("{}@example.com", ssn),
            password_hash: "hash".to_string(),
            car_make: "Toyota".to_string(),
            car_model: "Prius".to_string(),
            car_year: 2020,
            rating: 5.0,
            status: "available".to_string(),
            latitude,
            longitude,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_filter_keeps_only_drivers_in_radius() {
        // Centro en downtown Manhattan; un conductor en midtown (~5 mi),
        // otro en Los Angeles, otro sin ubicación
        let drivers = vec![
            driver_at("111-11-1111", Some(40.7549), Some(-73.9840)),
            driver_at("222-22-2222", Some(34.0522), Some(-118.2437)),
            driver_at("333-33-3333", None, None),
        ];

        let nearby = filter_within_radius(drivers, 40.7033, -74.0170, 10.0);
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].ssn, "111-11-1111");
    }
}
