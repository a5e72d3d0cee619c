//! Utilidades de validación
//!
//! Funciones helper y regex compartidos para validar los campos de
//! clientes, conductores y facturas.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// SSN en formato XXX-XX-XXXX
    pub static ref SSN_REGEX: Regex = Regex::new(r"^\d{3}-\d{2}-\d{4}$").unwrap();
    /// Teléfono: +1 seguido de 10 dígitos
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+1\d{10}$").unwrap();
    /// Código postal de 5 dígitos con extensión opcional
    pub static ref ZIP_CODE_REGEX: Regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();
    /// Identificador de factura BILL-12345678
    pub static ref BILL_ID_REGEX: Regex = Regex::new(r"^BILL-\d{8}$").unwrap();
}

/// Validar el año del vehículo: entre 2000 y el año siguiente al actual
pub fn validate_car_year(year: i32) -> Result<(), ValidationError> {
    let max_year = Utc::now().year() + 1;
    if year < 2000 || year > max_year {
        let mut error = ValidationError::new("car_year");
        error.message = Some("Car year must be between 2000 and next year".into());
        return Err(error);
    }
    Ok(())
}

/// Validar una coordenada geográfica
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        let mut error = ValidationError::new("coordinates");
        error.message = Some("Invalid latitude or longitude".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.message = Some("Value cannot be empty".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssn_regex() {
        assert!(SSN_REGEX.is_match("123-45-6789"));
        assert!(!SSN_REGEX.is_match("123456789"));
        assert!(!SSN_REGEX.is_match("123-45-678"));
        assert!(!SSN_REGEX.is_match("abc-de-fghi"));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_REGEX.is_match("+14155550123"));
        assert!(!PHONE_REGEX.is_match("4155550123"));
        assert!(!PHONE_REGEX.is_match("+1415555012"));
    }

    #[test]
    fn test_zip_code_regex() {
        assert!(ZIP_CODE_REGEX.is_match("94105"));
        assert!(ZIP_CODE_REGEX.is_match("94105-1234"));
        assert!(!ZIP_CODE_REGEX.is_match("9410"));
        assert!(!ZIP_CODE_REGEX.is_match("94105-12"));
    }

    #[test]
    fn test_bill_id_regex() {
        assert!(BILL_ID_REGEX.is_match("BILL-12345678"));
        assert!(!BILL_ID_REGEX.is_match("BILL-1234"));
        assert!(!BILL_ID_REGEX.is_match("INV-12345678"));
    }

    #[test]
    fn test_car_year_bounds() {
        assert!(validate_car_year(1999).is_err());
        assert!(validate_car_year(2000).is_ok());
        assert!(validate_car_year(Utc::now().year()).is_ok());
        assert!(validate_car_year(Utc::now().year() + 2).is_err());
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_coordinates(40.7128, -74.0060).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, 181.0).is_err());
    }
}
