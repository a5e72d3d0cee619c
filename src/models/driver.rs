//! Modelo de Driver
//!
//! Mapea a la tabla drivers. El estado solo admite los valores
//! available/unavailable; la ubicación actual es opcional hasta que el
//! conductor la reporta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado operativo del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Available,
    Unavailable,
}

impl DriverStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "unavailable" => Some(Self::Unavailable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub ssn: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
    pub email: String,
    pub password_hash: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub rating: f64,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(DriverStatus::parse("available"), Some(DriverStatus::Available));
        assert_eq!(DriverStatus::parse("unavailable"), Some(DriverStatus::Unavailable));
        assert_eq!(DriverStatus::parse("busy"), None);
        assert_eq!(DriverStatus::parse("AVAILABLE"), None);
    }
}
