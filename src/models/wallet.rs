//! Modelo de Wallet
//!
//! Registro de saldo keyed por ssn. Existe en dos variantes (clientes y
//! conductores) que comparten estructura pero viven en tablas separadas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Variante de wallet, determina la tabla de respaldo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletKind {
    Customer,
    Driver,
}

impl WalletKind {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Customer => "customer_wallets",
            Self::Driver => "driver_wallets",
        }
    }

    /// Titular de la wallet, tal como aparece en los mensajes de la API
    pub fn owner(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Driver => "Driver",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Wallet {
    pub ssn: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
