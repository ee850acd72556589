//! Backend de la consola de gestión de la oficina mecánica
//!
//! Vehículos con sus órdenes de servicio y fotos, presupuestos con cálculo
//! de totales, solicitudes de presupuesto públicas y el resumen del
//! dashboard. Todo en memoria; el login se verifica contra un servicio
//! externo y la sesión viaja en un JWT.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::build_router;
pub use state::AppState;
