//! Modelos
//!
//! Structs que mapean a las tablas PostgreSQL, junto con las
//! validaciones de dominio que no caben en un derive.

pub mod admin;
pub mod bill;
pub mod customer;
pub mod driver;
pub mod ride;
pub mod wallet;
