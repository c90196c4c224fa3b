use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use vehicle_rental::routes;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental - API de gestión de alquiler");
    info!("==============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos y aplicar migraciones
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config.clone());

    let app = routes::create_router().layer(cors).with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Oficinas:");
    info!("   POST /api/offices - Crear oficina");
    info!("   GET  /api/offices - Listar oficinas");
    info!("   GET  /api/offices/:id - Obtener oficina");
    info!("   PUT  /api/offices/:id - Actualizar oficina");
    info!("   DELETE /api/offices/:id - Eliminar oficina");
    info!("🚙 Modelos y vehículos:");
    info!("   POST /api/vehicle-models - Crear modelo");
    info!("   GET  /api/vehicle-models - Listar modelos");
    info!("   POST /api/vehicles - Crear vehículo (con trackers del plan)");
    info!("   GET  /api/vehicles - Listar vehículos (filtros status/office)");
    info!("   GET  /api/vehicles/:id/maintenance-status - Trackers del vehículo");
    info!("💶 Tarifas:");
    info!("   POST /api/tarifs - Crear tarifa");
    info!("   GET  /api/tarifs/match - Tramo aplicable a una duración");
    info!("📋 Órdenes de alquiler:");
    info!("   POST /api/rental-orders - Crear orden en draft");
    info!("   POST /api/rental-orders/actions/start - Iniciar lote");
    info!("   POST /api/rental-orders/actions/end - Finalizar lote");
    info!("   POST /api/rental-orders/actions/cancel - Cancelar lote");
    info!("🔧 Mantenimiento:");
    info!("   POST /api/service-types - Crear tipo de servicio");
    info!("   POST /api/maintenance-plans - Crear entrada del plan");
    info!("   POST /api/maintenance-logs - Registrar servicio realizado");
    info!("   POST /api/maintenance-logs/:id/lines - Añadir línea de coste");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Error instalando handler de Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("❌ Error instalando handler de señales: {}", e),
        }
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
