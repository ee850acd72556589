//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! fechas en formato brasileño y numeración de documentos.

pub mod dates;
pub mod errors;
pub mod numbering;
pub mod validation;

pub use dates::{BrDate, BrDateTime};
pub use errors::{AppError, AppResult};
