//! Configuración del proyecto
//!
//! Variables de entorno y valores por defecto de la consola.

pub mod environment;

pub use environment::*;
