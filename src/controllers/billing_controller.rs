use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;

use crate::dto::billing_dto::{
    BalanceResponse, BillFilters, BillResponse, CreateBillRequest, CreateWalletRequest,
    CreateWalletResponse, GetWalletResponse, WalletAmountRequest, WalletCheckResponse,
    WalletSummary,
};
use crate::events::{billing_events, topics};
use crate::models::bill::{validate_new_bill, Bill, BillStatus};
use crate::models::wallet::WalletKind;
use crate::repositories::bill_repository::BillRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct BillingController {
    customer_wallets: WalletRepository,
    driver_wallets: WalletRepository,
    bills: BillRepository,
    customers: CustomerRepository,
    drivers: DriverRepository,
}

impl BillingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customer_wallets: WalletRepository::new(pool.clone(), WalletKind::Customer),
            driver_wallets: WalletRepository::new(pool.clone(), WalletKind::Driver),
            bills: BillRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    fn wallets(&self, kind: WalletKind) -> &WalletRepository {
        match kind {
            WalletKind::Customer => &self.customer_wallets,
            WalletKind::Driver => &self.driver_wallets,
        }
    }

    pub async fn create_wallet(
        &self,
        kind: WalletKind,
        request: CreateWalletRequest,
    ) -> Result<CreateWalletResponse, AppError> {
        let ssn = require_ssn(request.ssn)?;

        let repository = self.wallets(kind);
        if repository.find(&ssn).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Wallet already exists for this {}",
                kind.owner().to_lowercase()
            )));
        }

        let wallet = repository.create(&ssn).await?;

        Ok(CreateWalletResponse {
            message: format!("{} wallet created successfully", kind.owner()),
            wallet: WalletSummary::from(wallet),
        })
    }

    /// Top-up de la wallet de un cliente
    pub async fn add_to_customer_wallet(
        &self,
        request: WalletAmountRequest,
    ) -> Result<BalanceResponse, AppError> {
        let (ssn, amount) = require_ssn_and_amount(request)?;

        let wallet = self
            .customer_wallets
            .credit(&ssn, amount)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(BalanceResponse {
            message: "Wallet topped up".to_string(),
            balance: WalletSummary::from(wallet).balance,
        })
    }

    /// Retiro de la wallet de un conductor. La ruta histórica se llama
    /// addToDriverWallet, pero la operación es el pago al conductor.
    pub async fn withdraw_from_driver_wallet(
        &self,
        request: WalletAmountRequest,
    ) -> Result<BalanceResponse, AppError> {
        let (ssn, amount) = require_ssn_and_amount(request)?;

        if self.driver_wallets.find(&ssn).await?.is_none() {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        let wallet = self
            .driver_wallets
            .withdraw(&ssn, amount)
            .await?
            .ok_or_else(|| AppError::BadRequest("Insufficient balance".to_string()))?;

        Ok(BalanceResponse {
            message: "Amount withdrawn".to_string(),
            balance: WalletSummary::from(wallet).balance,
        })
    }

    /// Chequeo de affordability. Query pura: nunca debita, el veredicto
    /// negativo no es un error.
    pub async fn check_customer_wallet(
        &self,
        request: WalletAmountRequest,
    ) -> Result<WalletCheckResponse, AppError> {
        let (ssn, amount) = require_ssn_and_amount(request)?;

        let wallet = self
            .customer_wallets
            .find(&ssn)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let (can_afford, message) = affordability_verdict(wallet.balance, amount);

        Ok(WalletCheckResponse {
            can_afford,
            balance: WalletSummary::from(wallet).balance,
            message: message.to_string(),
        })
    }

    pub async fn get_wallet(
        &self,
        kind: WalletKind,
        ssn: &str,
    ) -> Result<GetWalletResponse, AppError> {
        let wallet = self.wallets(kind).find(ssn).await?.ok_or_else(|| {
            AppError::NotFound(format!("{} wallet not found", kind.owner()))
        })?;

        let summary = WalletSummary::from(wallet);
        Ok(GetWalletResponse {
            ssn: summary.ssn,
            balance: summary.balance,
            message: "Wallet fetched successfully".to_string(),
        })
    }

    pub async fn delete_wallet(&self, kind: WalletKind, ssn: &str) -> Result<String, AppError> {
        if !self.wallets(kind).delete(ssn).await? {
            return Err(AppError::NotFound(format!(
                "{} wallet not found",
                kind.owner()
            )));
        }

        Ok(format!("{} wallet deleted successfully", kind.owner()))
    }

    /// Registrar una factura finalizada. Publica invoice.generated.
    pub async fn create_bill(
        &self,
        request: CreateBillRequest,
        state: &AppState,
    ) -> Result<BillResponse, AppError> {
        let status = match request.status.as_deref() {
            Some(value) => BillStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest("Invalid status value".to_string()))?,
            None => BillStatus::Pending,
        };

        let total_amount = Decimal::from_f64_retain(request.total_amount)
            .ok_or_else(|| AppError::BadRequest("Invalid total amount".to_string()))?;

        validate_new_bill(
            &request.bill_id,
            request.date,
            request.pickup_time,
            request.dropoff_time,
            request.distance_covered,
            total_amount,
        )?;

        if self.bills.bill_id_exists(&request.bill_id).await? {
            return Err(AppError::Conflict("Bill already exists".to_string()));
        }

        let now = Utc::now();
        let bill = Bill {
            bill_id: request.bill_id,
            date: request.date,
            pickup_time: request.pickup_time,
            dropoff_time: request.dropoff_time,
            distance_covered: request.distance_covered,
            total_amount,
            pickup_location: request.pickup_location,
            dropoff_location: request.dropoff_location,
            driver_id: request.driver_id,
            customer_id: request.customer_id,
            status: status.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };

        let saved = self.bills.create(&bill).await?;

        state
            .events
            .publish(
                topics::BILLING_EVENTS,
                billing_events::INVOICE_GENERATED,
                &saved.bill_id,
                json!({
                    "billId": saved.bill_id,
                    "customerId": saved.customer_id,
                    "driverId": saved.driver_id,
                    "amount": saved.total_amount,
                }),
            )
            .await;

        self.enrich_bill(saved).await
    }

    pub async fn list_bills(&self, filters: &BillFilters) -> Result<Vec<BillResponse>, AppError> {
        let bills = self.bills.list_filtered(filters).await?;

        let mut responses = Vec::with_capacity(bills.len());
        for bill in bills {
            responses.push(self.enrich_bill(bill).await?);
        }

        Ok(responses)
    }

    pub async fn get_bill(&self, bill_id: &str) -> Result<BillResponse, AppError> {
        let bill = self
            .bills
            .find_by_id(bill_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

        self.enrich_bill(bill).await
    }

    /// Adjuntar nombres de cliente y conductor. Las referencias son
    /// advisory: un perfil borrado produce "N/A", no un error.
    async fn enrich_bill(&self, bill: Bill) -> Result<BillResponse, AppError> {
        let customer_name = match self.customers.find_by_id(&bill.customer_id).await {
            Ok(Some(customer)) => format!("{} {}", customer.first_name, customer.last_name),
            _ => "N/A".to_string(),
        };

        let driver_name = match self.drivers.find_by_id(&bill.driver_id).await {
            Ok(Some(driver)) => format!("{} {}", driver.first_name, driver.last_name),
            _ => "N/A".to_string(),
        };

        Ok(BillResponse::from_bill(bill, customer_name, driver_name))
    }
}

fn require_ssn(ssn: Option<String>) -> Result<String, AppError> {
    match ssn {
        Some(ssn) if !ssn.trim().is_empty() => Ok(ssn),
        _ => Err(AppError::BadRequest("SSN is required".to_string())),
    }
}

fn require_ssn_and_amount(request: WalletAmountRequest) -> Result<(String, Decimal), AppError> {
    let invalid = || AppError::BadRequest("Invalid ssn or amount".to_string());

    let ssn = match request.ssn {
        Some(ssn) if !ssn.trim().is_empty() => ssn,
        _ => return Err(invalid()),
    };

    let amount = request.amount.filter(|a| *a > 0.0).ok_or_else(invalid)?;
    let amount = Decimal::from_f64_retain(amount).ok_or_else(invalid)?;

    Ok((ssn, amount))
}

/// Veredicto de saldo: el mensaje siempre acompaña al booleano
fn affordability_verdict(balance: Decimal, amount: Decimal) -> (bool, &'static str) {
    if balance >= amount {
        (true, "Sufficient balance")
    } else {
        (false, "Insufficient balance")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_and_message_agree() {
        let balance = Decimal::new(5000, 2); // 50.00

        let (ok, msg) = affordability_verdict(balance, Decimal::new(2500, 2));
        assert!(ok);
        assert_eq!(msg, "Sufficient balance");

        let (ok, msg) = affordability_verdict(balance, Decimal::new(5000, 2));
        assert!(ok, "el saldo exacto alcanza");
        assert_eq!(msg, "Sufficient balance");

        let (ok, msg) = affordability_verdict(balance, Decimal::new(5001, 2));
        assert!(!ok);
        assert_eq!(msg, "Insufficient balance");
    }

    #[test]
    fn test_require_ssn_and_amount() {
        assert!(require_ssn_and_amount(WalletAmountRequest {
            ssn: Some("123-45-6789".to_string()),
            amount: Some(10.0),
        })
        .is_ok());

        // Monto no positivo
        assert!(require_ssn_and_amount(WalletAmountRequest {
            ssn: Some("123-45-6789".to_string()),
            amount: Some(0.0),
        })
        .is_err());

        // SSN ausente
        assert!(require_ssn_and_amount(WalletAmountRequest {
            ssn: None,
            amount: Some(10.0),
        })
        .is_err());
    }

    #[test]
    fn test_require_ssn() {
        assert!(require_ssn(Some("123-45-6789".to_string())).is_ok());
        assert!(require_ssn(Some("  ".to_string())).is_err());
        assert!(require_ssn(None).is_err());
    }
}
