use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use oficina_backend::config::environment::EnvironmentConfig;
use oficina_backend::repositories::store::WorkshopStore;
use oficina_backend::services::auth_service::HttpAuthVerifier;
use oficina_backend::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🔧 Oficina - Console de Gestão");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    if config.is_development() {
        warn!("⚠️ Modo desarrollo: JWT_SECRET por defecto si no está definido");
    }
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se aceptan todos los orígenes");
    }

    let store = if config.seed_sample_data {
        WorkshopStore::with_sample_data()?
    } else {
        info!("📭 Iniciando con almacén vacío");
        WorkshopStore::new()
    };

    let verifier = HttpAuthVerifier::from_environment(&config)?;
    info!("🔐 Verificación de login en {}", config.auth_verify_url);

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(store, config, Arc::new(verifier)));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/catalog/statuses - Etiquetas y colores");
    info!("🔐 Auth:");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Sesión actual");
    info!("📝 Solicitudes:");
    info!("   POST /api/quote-requests - Formulario público");
    info!("   GET  /api/quote-requests - Listar (q, status)");
    info!("   GET|PUT|DELETE /api/quote-requests/:id");
    info!("   PATCH /api/quote-requests/:id/status");
    info!("💰 Presupuestos:");
    info!("   GET|POST /api/quotes - Listar (q, status) / crear");
    info!("   GET|PUT|DELETE /api/quotes/:id");
    info!("   PATCH /api/quotes/:id/status");
    info!("🚗 Vehículos y servicios:");
    info!("   GET|POST /api/vehicles - Listar (q) / crear");
    info!("   GET|PUT|DELETE /api/vehicles/:id");
    info!("   POST /api/vehicles/:id/services - Abrir orden de servicio");
    info!("   GET  /api/services - Listar (status, plate, q)");
    info!("   GET|PUT|DELETE /api/services/:order_ref");
    info!("   POST /api/services/:order_ref/photos - Agregar foto");
    info!("   DELETE /api/services/:order_ref/photos/:photo_id");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard - Resumen");
    info!("   GET  /api/dashboard/recent-services - Servicios recientes");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
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
