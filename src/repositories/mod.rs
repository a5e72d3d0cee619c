//! Repositorios
//!
//! Acceso a datos con sqlx. Cada repositorio encapsula las queries de
//! una tabla; las reglas de negocio viven en los controllers.

pub mod admin_repository;
pub mod bill_repository;
pub mod customer_repository;
pub mod driver_repository;
pub mod ride_repository;
pub mod wallet_repository;
