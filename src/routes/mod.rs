//! Routers HTTP
//!
//! Un router por recurso; `build_router` los monta bajo `/api` y aplica la
//! autenticación a los grupos protegidos.

pub mod auth_routes;
pub mod catalog_routes;
pub mod dashboard_routes;
pub mod quote_request_routes;
pub mod quote_routes;
pub mod service_routes;
pub mod vehicle_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/quotes", quote_routes::create_quote_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/services", service_routes::create_service_router(state.config.max_photo_bytes))
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let api = Router::new()
        .nest("/auth", auth_routes::create_auth_router(state.clone()))
        .nest(
            "/quote-requests",
            quote_request_routes::create_quote_request_router(state.clone()),
        )
        .nest("/catalog", catalog_routes::create_catalog_router())
        .merge(protected);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "oficina-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
