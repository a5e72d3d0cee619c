//! Eventos de dominio
//!
//! Catálogo de nombres de eventos y topics, junto con el publisher Kafka.
//! Los consumidores viven en otros sistemas; aquí solo se publica.

pub mod publisher;

pub use publisher::EventPublisher;

/// Eventos del ciclo de vida de un ride
pub mod ride_events {
    pub const CREATED: &str = "ride.created";
    pub const UPDATED: &str = "ride.updated";
    pub const COMPLETED: &str = "ride.completed";
    pub const CANCELLED: &str = "ride.cancelled";
    pub const ACCEPTED: &str = "ride.accepted";
}

/// Eventos de estado de conductores
pub mod driver_events {
    pub const LOCATION_UPDATED: &str = "driver.location.updated";
    pub const AVAILABLE: &str = "driver.available";
    pub const UNAVAILABLE: &str = "driver.unavailable";
}

/// Eventos de facturación
pub mod billing_events {
    pub const PAYMENT_PROCESSED: &str = "payment.processed";
    pub const PAYMENT_FAILED: &str = "payment.failed";
    pub const INVOICE_GENERATED: &str = "invoice.generated";
}

/// Eventos que disparan notificaciones
pub mod notification_events {
    pub const RIDE_ACCEPTED: &str = "ride.accepted";
    pub const RIDE_COMPLETED: &str = "ride.completed";
    pub const DRIVER_ARRIVED: &str = "driver.arrived";
    pub const PAYMENT_RECEIPT: &str = "payment.receipt";
}

/// Topics de Kafka
pub mod topics {
    pub const RIDE_REQUESTED: &str = "ride.requested";
    pub const RIDE_ASSIGNED: &str = "ride.assigned";
    pub const RIDE_UPDATED: &str = "ride.updated";
    pub const RIDE_COMPLETED: &str = "ride.completed";
    pub const BILLING_EVENTS: &str = "billing.events";
    pub const DRIVER_LOCATIONS: &str = "driver.locations";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_event_names() {
        assert_eq!(ride_events::CREATED, "ride.created");
        assert_eq!(ride_events::UPDATED, "ride.updated");
        assert_eq!(ride_events::COMPLETED, "ride.completed");
        assert_eq!(ride_events::CANCELLED, "ride.cancelled");
        assert_eq!(ride_events::ACCEPTED, "ride.accepted");
    }

    #[test]
    fn test_driver_event_names() {
        assert_eq!(driver_events::LOCATION_UPDATED, "driver.location.updated");
        assert_eq!(driver_events::AVAILABLE, "driver.available");
        assert_eq!(driver_events::UNAVAILABLE, "driver.unavailable");
    }

    #[test]
    fn test_billing_and_notification_event_names() {
        assert_eq!(billing_events::PAYMENT_PROCESSED, "payment.processed");
        assert_eq!(billing_events::PAYMENT_FAILED, "payment.failed");
        assert_eq!(billing_events::INVOICE_GENERATED, "invoice.generated");
        assert_eq!(notification_events::RIDE_ACCEPTED, "ride.accepted");
        assert_eq!(notification_events::RIDE_COMPLETED, "ride.completed");
        assert_eq!(notification_events::DRIVER_ARRIVED, "driver.arrived");
        assert_eq!(notification_events::PAYMENT_RECEIPT, "payment.receipt");
    }

    #[test]
    fn test_topic_names() {
        assert_eq!(topics::RIDE_REQUESTED, "ride.requested");
        assert_eq!(topics::RIDE_ASSIGNED, "ride.assigned");
        assert_eq!(topics::RIDE_UPDATED, "ride.updated");
        assert_eq!(topics::RIDE_COMPLETED, "ride.completed");
        assert_eq!(topics::BILLING_EVENTS, "billing.events");
        assert_eq!(topics::DRIVER_LOCATIONS, "driver.locations");
    }
}
