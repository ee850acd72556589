//! Modelos de datos del sistema
//!
//! Este módulo contiene los modelos de dominio de la oficina: vehículos,
//! servicios con fotos, presupuestos, solicitudes, usuario y claims de sesión.

pub mod analytics;
pub mod auth;
pub mod quote;
pub mod quote_request;
pub mod service;
pub mod status;
pub mod user;
pub mod vehicle;

pub use quote::*;
pub use quote_request::*;
pub use service::*;
pub use status::*;
pub use user::*;
pub use vehicle::*;
