//! Publisher de eventos sobre Kafka
//!
//! Envoltorio best-effort sobre un `FutureProducer` de rdkafka. La
//! publicación es advisory: si el broker no está disponible se registra
//! un warning y el request sigue su curso.

use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use serde_json::json;
use tracing::{debug, warn};

const CLIENT_ID: &str = "ride-hailing-backend";
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Publisher de eventos de dominio
#[derive(Clone)]
pub struct EventPublisher {
    producer: Option<FutureProducer>,
}

impl EventPublisher {
    /// Crear un publisher conectado a los brokers indicados
    pub fn new(brokers: &str) -> anyhow::Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("client.id", CLIENT_ID)
            .set("message.timeout.ms", "5000")
            .set("retries", "8")
            .create()?;

        Ok(Self {
            producer: Some(producer),
        })
    }

    /// Publisher desactivado, para entornos sin broker
    pub fn disabled() -> Self {
        Self { producer: None }
    }

    /// Publicar un evento en el topic indicado, keyed por entidad.
    /// El payload es el sobre JSON `{event, timestamp, data}`.
    pub async fn publish(&self, topic: &str, event: &str, key: &str, data: serde_json::Value) {
        let Some(producer) = &self.producer else {
            debug!("Publisher desactivado, se omite evento {}", event);
            return;
        };

        let envelope = json!({
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "data": data,
        });

        let payload = envelope.to_string();
        let record = FutureRecord::to(topic).payload(&payload).key(key);

        match producer.send(record, Timeout::After(SEND_TIMEOUT)).await {
            Ok((partition, offset)) => {
                debug!(
                    "📨 Evento {} publicado en {} (partition {}, offset {})",
                    event, topic, partition, offset
                );
            }
            Err((e, _)) => {
                warn!("⚠️ No se pudo publicar evento {} en {}: {}", event, topic, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_publisher_is_a_noop() {
        let publisher = EventPublisher::disabled();
        // No broker: no debe bloquear ni fallar
        publisher
            .publish(
                crate::events::topics::RIDE_REQUESTED,
                crate::events::ride_events::CREATED,
                "ride-1",
                json!({ "rideId": "ride-1" }),
            )
            .await;
    }
}
