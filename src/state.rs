//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. El almacén
//! en memoria se comparte detrás de un único `RwLock`; es la única
//! sincronización de la aplicación.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::store::WorkshopStore;
use crate::services::auth_service::AuthVerifier;
use crate::services::jwt_service::{JwtConfig, JwtService};

pub type SharedStore = Arc<RwLock<WorkshopStore>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<EnvironmentConfig>,
    pub auth_verifier: Arc<dyn AuthVerifier>,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        store: WorkshopStore,
        config: EnvironmentConfig,
        auth_verifier: Arc<dyn AuthVerifier>,
    ) -> Self {
        let jwt = JwtService::new(JwtConfig::from_environment(&config));
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
            auth_verifier,
            jwt: Arc::new(jwt),
        }
    }
}
