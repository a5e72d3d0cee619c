//! Circuit breaker para servicios externos
//!
//! Máquina de estados Closed/Open/HalfOpen que protege las llamadas al
//! servicio de predicción de tarifas. Mientras el circuito está abierto
//! las llamadas fallan rápido sin tocar la red.

use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::warn;

/// Configuración del circuit breaker
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    pub name: String,
    pub timeout: Duration,
    pub error_threshold_percentage: f64,
    pub reset_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug)]
struct BreakerInner {
    state: BreakerState,
    failure_count: u64,
    success_count: u64,
    next_attempt: Instant,
}

/// Errores producidos por el breaker o por la llamada protegida
#[derive(Error, Debug)]
pub enum CircuitBreakerError<E> {
    #[error("Service unavailable (circuit breaker open)")]
    Open,

    #[error("Service timeout")]
    Timeout,

    #[error("Service call failed: {0}")]
    Inner(E),
}

pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    inner: Mutex<BreakerInner>,
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(BreakerInner {
                state: BreakerState::Closed,
                failure_count: 0,
                success_count: 0,
                next_attempt: Instant::now(),
            }),
        }
    }

    /// Ejecutar una llamada protegida por el breaker
    pub async fn call<F, Fut, T, E>(&self, service_fn: F) -> Result<T, CircuitBreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            if inner.state == BreakerState::Open {
                if Instant::now() >= inner.next_attempt {
                    inner.state = BreakerState::HalfOpen;
                } else {
                    return Err(CircuitBreakerError::Open);
                }
            }
        }

        match tokio::time::timeout(self.config.timeout, service_fn()).await {
            Ok(Ok(value)) => {
                self.on_success();
                Ok(value)
            }
            Ok(Err(e)) => {
                self.on_failure();
                Err(CircuitBreakerError::Inner(e))
            }
            Err(_) => {
                self.on_failure();
                Err(CircuitBreakerError::Timeout)
            }
        }
    }

    fn on_success(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.success_count += 1;
        if inner.state == BreakerState::HalfOpen {
            inner.state = BreakerState::Closed;
            inner.failure_count = 0;
            inner.success_count = 0;
        }
    }

    fn on_failure(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.failure_count += 1;

        let total = inner.success_count + inner.failure_count;
        let error_percentage = (inner.failure_count as f64 / total as f64) * 100.0;

        if error_percentage > self.config.error_threshold_percentage {
            inner.state = BreakerState::Open;
            inner.next_attempt = Instant::now() + self.config.reset_timeout;
            warn!(
                "⚡ Circuit breaker '{}' abierto ({}% de errores)",
                self.config.name, error_percentage as u32
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> CircuitBreakerConfig {
        CircuitBreakerConfig {
            name: "test".to_string(),
            timeout: Duration::from_millis(50),
            error_threshold_percentage: 50.0,
            reset_timeout: Duration::from_millis(100),
        }
    }

    async fn failing() -> Result<(), &'static str> {
        Err("boom")
    }

    async fn succeeding() -> Result<u32, &'static str> {
        Ok(42)
    }

    #[tokio::test]
    async fn test_opens_after_failures_and_fails_fast() {
        let breaker = CircuitBreaker::new(fast_config());

        // Primera falla dispara el 100% de errores y abre el circuito
        assert!(matches!(
            breaker.call(failing).await,
            Err(CircuitBreakerError::Inner("boom"))
        ));

        // Con el circuito abierto no se ejecuta la llamada
        assert!(matches!(
            breaker.call(succeeding).await,
            Err(CircuitBreakerError::Open)
        ));
    }

    #[tokio::test]
    async fn test_half_open_recovers_on_success() {
        let breaker = CircuitBreaker::new(fast_config());

        let _ = breaker.call(failing).await;
        assert!(matches!(
            breaker.call(succeeding).await,
            Err(CircuitBreakerError::Open)
        ));

        // Después del reset_timeout el breaker permite una llamada de prueba
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(matches!(breaker.call(succeeding).await, Ok(42)));

        // Recuperado: las llamadas siguen pasando
        assert!(matches!(breaker.call(succeeding).await, Ok(42)));
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let breaker = CircuitBreaker::new(fast_config());

        let slow = || async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<(), &'static str>(())
        };

        assert!(matches!(
            breaker.call(slow).await,
            Err(CircuitBreakerError::Timeout)
        ));
        assert!(matches!(
            breaker.call(succeeding).await,
            Err(CircuitBreakerError::Open)
        ));
    }
}
