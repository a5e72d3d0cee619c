//! Utilidades geoespaciales
//!
//! Cálculo de distancias con la fórmula de Haversine para el matching
//! de conductores y rides cercanos.

const EARTH_RADIUS_KM: f64 = 6371.0;
const EARTH_RADIUS_MILES: f64 = 3959.0;
const KM_TO_MILES: f64 = 0.621371;

/// Unidad de distancia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

/// Distancia Haversine entre dos puntos
pub fn haversine_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    unit: DistanceUnit,
) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let radius = match unit {
        DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        DistanceUnit::Miles => EARTH_RADIUS_MILES,
    };

    radius * c
}

/// Verificar si un punto está dentro de un radio dado
pub fn is_within_radius(
    center_lat: f64,
    center_lon: f64,
    point_lat: f64,
    point_lon: f64,
    radius: f64,
    unit: DistanceUnit,
) -> bool {
    haversine_distance(center_lat, center_lon, point_lat, point_lon, unit) <= radius
}

/// Convertir kilómetros a millas
pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

/// Convertir millas a kilómetros
pub fn miles_to_km(miles: f64) -> f64 {
    miles / KM_TO_MILES
}

#[cfg(test)]
mod tests {
    use super::*;

    // NYC y LA
    const NYC: (f64, f64) = (40.7128, -74.0060);
    const LA: (f64, f64) = (34.0522, -118.2437);

    #[test]
    fn test_haversine_known_distance() {
        let km = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Kilometers);
        // ~3936 km según referencias públicas
        assert!((km - 3936.0).abs() < 30.0, "got {}", km);

        let miles = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Miles);
        assert!((miles - 2445.0).abs() < 20.0, "got {}", miles);
    }

    #[test]
    fn test_zero_distance() {
        let d = haversine_distance(NYC.0, NYC.1, NYC.0, NYC.1, DistanceUnit::Kilometers);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_within_radius_consistent_with_distance() {
        // Dos puntos en Manhattan, ~5 km
        let downtown = (40.7033, -74.0170);
        let midtown = (40.7549, -73.9840);

        let d = haversine_distance(
            downtown.0, downtown.1, midtown.0, midtown.1,
            DistanceUnit::Miles,
        );
        assert!(is_within_radius(
            downtown.0, downtown.1, midtown.0, midtown.1,
            d + 0.1,
            DistanceUnit::Miles
        ));
        assert!(!is_within_radius(
            downtown.0, downtown.1, midtown.0, midtown.1,
            d - 0.1,
            DistanceUnit::Miles
        ));
    }

    #[test]
    fn test_unit_conversions() {
        assert!((km_to_miles(miles_to_km(10.0)) - 10.0).abs() < 1e-9);
        assert!((km_to_miles(1.0) - 0.621371).abs() < 1e-9);
    }
}
