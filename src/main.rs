use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use ride_hailing_backend::cache::redis_client::RedisClient;
use ride_hailing_backend::cache::CacheConfig;
use ride_hailing_backend::config::environment::EnvironmentConfig;
use ride_hailing_backend::database;
use ride_hailing_backend::events::EventPublisher;
use ride_hailing_backend::routes::create_api_router;
use ride_hailing_backend::state::AppState;

/// Intervalo de barrido de sesiones expiradas
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚕 Ride Hailing Backend");
    info!("=======================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Redis es opcional: sin cache el servicio degrada a queries directas
    let redis_config = CacheConfig {
        redis_url: config.redis_url.clone(),
        ..CacheConfig::default()
    };
    let redis = match RedisClient::new(redis_config).await {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("⚠️ Redis no disponible, se continúa sin cache: {}", e);
            None
        }
    };

    // El publisher de eventos es best-effort: sin broker se desactiva
    let events = match EventPublisher::new(&config.kafka_brokers) {
        Ok(publisher) => {
            info!("✅ Producer de Kafka conectado a {}", config.kafka_brokers);
            publisher
        }
        Err(e) => {
            warn!("⚠️ Kafka no disponible, eventos desactivados: {}", e);
            EventPublisher::disabled()
        }
    };

    let app_state = AppState::new(pool, config.clone(), redis, events);

    // Barrido periódico del registro de sesiones
    let sweeper_state = app_state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sweeper_state.cleanup_expired_sessions().await;
        }
    });

    let app = create_api_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Customers:");
    info!("   POST /api/customers - Registrar cliente");
    info!("   POST /api/customers/login - Login cliente");
    info!("   GET  /api/customers/:id/nearby-drivers - Conductores cercanos");
    info!("🚗 Drivers:");
    info!("   POST /api/drivers/signup - Registrar conductor");
    info!("   GET  /api/drivers - Listar con filtros");
    info!("   PUT  /api/drivers/:id/status - Estado y ubicación");
    info!("🛡️ Admin:");
    info!("   POST /api/admin/signup - Registrar administrador");
    info!("   GET  /api/admin/bills - Revisión de facturas");
    info!("💳 Billing:");
    info!("   POST /api/billing/createCustomerWallet - Crear wallet");
    info!("   POST /api/billing/customerWalletCheck - Chequeo de saldo");
    info!("   POST /api/billing/bills - Registrar factura");
    info!("🚕 Rides:");
    info!("   POST /api/rides - Solicitar ride");
    info!("   GET  /api/rides/nearby - Rides sin asignar cercanos");
    info!("   GET  /api/rides/nearby-drivers - Conductores cercanos");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
