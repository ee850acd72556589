//! Services module
//!
//! Lógica de negocio: cálculo de presupuestos, estadísticas del dashboard,
//! emisión de tokens y verificación de credenciales externas.

pub mod auth_service;
pub mod jwt_service;
pub mod quote_calculator;
pub mod statistics;

pub use auth_service::{AuthVerifier, HttpAuthVerifier};
pub use jwt_service::{JwtConfig, JwtService};
