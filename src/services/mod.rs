//! Servicios
//!
//! Clientes de servicios externos y lógica que cruza repositorios.

pub mod location_service;
pub mod pricing_service;
