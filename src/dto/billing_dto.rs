//! DTOs de Billing
//!
//! Wallets y facturas. Los saldos viajan como números planos en el
//! wire aunque se almacenan como NUMERIC.

use chrono::{DateTime, NaiveDate, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::bill::Bill;
use crate::models::wallet::Wallet;

/// Request para crear una wallet. El ssn se valida a mano para poder
/// responder 400 "SSN is required" cuando falta.
#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    pub ssn: Option<String>,
}

/// Request de crédito/retiro/chequeo sobre una wallet
#[derive(Debug, Deserialize)]
pub struct WalletAmountRequest {
    pub ssn: Option<String>,
    pub amount: Option<f64>,
}

/// Wallet embebida en la respuesta de creación
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletSummary {
    pub ssn: String,
    pub balance: f64,
}

impl From<Wallet> for WalletSummary {
    fn from(wallet: Wallet) -> Self {
        Self {
            ssn: wallet.ssn,
            balance: wallet.balance.to_f64().unwrap_or(0.0),
        }
    }
}

/// Respuesta de creación de wallet
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWalletResponse {
    pub message: String,
    pub wallet: WalletSummary,
}

/// Respuesta de top-up / retiro
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub message: String,
    pub balance: f64,
}

/// Veredicto de affordability. Chequeo puro: nunca debita.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCheckResponse {
    pub can_afford: bool,
    pub balance: f64,
    pub message: String,
}

/// Respuesta de consulta de wallet
#[derive(Debug, Serialize, Deserialize)]
pub struct GetWalletResponse {
    pub ssn: String,
    pub balance: f64,
    pub message: String,
}

/// Request para registrar una factura finalizada
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub bill_id: String,
    pub date: DateTime<Utc>,
    pub pickup_time: DateTime<Utc>,
    pub dropoff_time: DateTime<Utc>,
    pub distance_covered: f64,
    pub total_amount: f64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub driver_id: String,
    pub customer_id: String,
    pub status: Option<String>,
}

/// Filtros de búsqueda de facturas
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillFilters {
    pub bill_id: Option<String>,
    pub customer_id: Option<String>,
    pub driver_id: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Factura enriquecida con los nombres de cliente y conductor.
/// Si el perfil referenciado no existe, el nombre queda en "N/A".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub bill_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub driver_id: String,
    pub driver_name: String,
    pub amount: f64,
    pub status: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub distance_covered: f64,
    pub date: DateTime<Utc>,
    pub pickup_time: DateTime<Utc>,
    pub dropoff_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BillResponse {
    pub fn from_bill(bill: Bill, customer_name: String, driver_name: String) -> Self {
        Self {
            bill_id: bill.bill_id,
            customer_id: bill.customer_id,
            customer_name,
            driver_id: bill.driver_id,
            driver_name,
            amount: bill.total_amount.to_f64().unwrap_or(0.0),
            status: bill.status,
            pickup_location: bill.pickup_location,
            dropoff_location: bill.dropoff_location,
            distance_covered: bill.distance_covered,
            date: bill.date,
            pickup_time: bill.pickup_time,
            dropoff_time: bill.dropoff_time,
            created_at: bill.created_at,
            updated_at: bill.updated_at,
        }
    }
}
