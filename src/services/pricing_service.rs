//! Cliente del servicio de predicción de tarifas
//!
//! El modelo de pricing es un servicio externo opaco: se le envía el
//! tuple pickup/dropoff/pasajeros y devuelve la tarifa estimada. Las
//! llamadas van protegidas por un circuit breaker.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::utils::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use crate::utils::errors::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Datos del ride que alimentan la predicción
#[derive(Debug, Clone)]
pub struct FareRequest {
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub passenger_count: i32,
    pub pickup_datetime: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct PredictionRequest {
    pickup_latitude: f64,
    pickup_longitude: f64,
    dropoff_latitude: f64,
    dropoff_longitude: f64,
    passenger_count: i32,
    pickup_datetime: String,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    predicted_fare: f64,
}

pub struct PricingService {
    client: Client,
    url: String,
    breaker: CircuitBreaker,
}

impl PricingService {
    pub fn new(client: Client, url: String) -> Self {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            name: "ml-price-predict".to_string(),
            timeout: Duration::from_secs(3),
            error_threshold_percentage: 50.0,
            reset_timeout: Duration::from_secs(30),
        });

        Self {
            client,
            url,
            breaker,
        }
    }

    /// Obtener la tarifa predicha para un ride
    pub async fn calculate_ride_price(&self, request: &FareRequest) -> Result<f64, AppError> {
        let body = PredictionRequest {
            pickup_latitude: request.pickup_latitude,
            pickup_longitude: request.pickup_longitude,
            dropoff_latitude: request.dropoff_latitude,
            dropoff_longitude: request.dropoff_longitude,
            passenger_count: request.passenger_count,
            // Formato que espera el modelo: 2015-01-27 13:08:24.000000
            pickup_datetime: request
                .pickup_datetime
                .format("%Y-%m-%d %H:%M:%S%.6f")
                .to_string(),
        };

        let result = self
            .breaker
            .call(|| async {
                let response = self
                    .client
                    .post(&self.url)
                    .timeout(REQUEST_TIMEOUT)
                    .json(&body)
                    .send()
                    .await?
                    .error_for_status()?;

                let parsed: PredictionResponse = response.json().await?;
                Ok::<f64, reqwest::Error>(parsed.predicted_fare)
            })
            .await;

        result.map_err(|e| {
            error!("❌ Falló la predicción de tarifa: {}", e);
            AppError::ServiceUnavailable("Price calculation service unavailable".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_datetime_format() {
        let dt: DateTime<Utc> = "2015-01-27T13:08:24Z".parse().unwrap();
        let formatted = dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string();
        assert_eq!(formatted, "2015-01-27 13:08:24.000000");
    }
}
