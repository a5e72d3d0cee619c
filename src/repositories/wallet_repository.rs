use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::wallet::{Wallet, WalletKind};
use crate::utils::errors::AppError;

/// Repositorio de wallets. La variante (customer/driver) determina la
/// tabla; toda la aritmética de saldo ocurre en un único statement SQL,
/// que es la única atomicidad que se promete.
pub struct WalletRepository {
    pool: PgPool,
    kind: WalletKind,
}

impl WalletRepository {
    pub fn new(pool: PgPool, kind: WalletKind) -> Self {
        Self { pool, kind }
    }

    pub fn kind(&self) -> WalletKind {
        self.kind
    }

    pub async fn create(&self, ssn: &str) -> Result<Wallet, AppError> {
        let sql = format!(
            r#"
            INSERT INTO {} (ssn, balance, created_at, updated_at)
            VALUES ($1, 0, $2, $3)
            RETURNING *
            "#,
            self.kind.table()
        );

        let now = chrono::Utc::now();
        let result = sqlx::query_as::<_, Wallet>(&sql)
            .bind(ssn)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find(&self, ssn: &str) -> Result<Option<Wallet>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE ssn = $1", self.kind.table());

        let result = sqlx::query_as::<_, Wallet>(&sql)
            .bind(ssn)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    /// Acreditar un monto. Devuelve la wallet actualizada, o None si el
    /// ssn no tiene wallet.
    pub async fn credit(&self, ssn: &str, amount: Decimal) -> Result<Option<Wallet>, AppError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET balance = balance + $2, updated_at = $3
            WHERE ssn = $1
            RETURNING *
            "#,
            self.kind.table()
        );

        let result = sqlx::query_as::<_, Wallet>(&sql)
            .bind(ssn)
            .bind(amount)
            .bind(chrono::Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    /// Retirar un monto. El chequeo de suficiencia vive en el WHERE:
    /// si el saldo no alcanza, el statement no toca ninguna fila.
    pub async fn withdraw(&self, ssn: &str, amount: Decimal) -> Result<Option<Wallet>, AppError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET balance = balance - $2, updated_at = $3
            WHERE ssn = $1 AND balance >= $2
            RETURNING *
            "#,
            self.kind.table()
        );

        let result = sqlx::query_as::<_, Wallet>(&sql)
            .bind(ssn)
            .bind(amount)
            .bind(chrono::Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn delete(&self, ssn: &str) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE ssn = $1", self.kind.table());

        let result = sqlx::query(&sql).bind(ssn).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
