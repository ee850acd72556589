//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos de
//! entrada. Se usan como `custom` en los DTOs (`validator`) y desde los
//! controladores antes de llamar al repositorio.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Placa antigua (`ABC-1234` / `ABC1234`) o Mercosul (`ABC1D23`)
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Z]{3}-?[0-9][A-Z0-9][0-9]{2}$").unwrap();
    static ref DATA_URI_RE: Regex =
        Regex::new(r"^data:(image/[a-z0-9.+-]+);base64,([A-Za-z0-9+/=\s]+)$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un precio no sea negativo
pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Precio unitario máximo aceptado en una línea de presupuesto
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

/// Validar precio unitario: no negativo y dentro del máximo
pub fn validate_unit_price(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(value)?;
    if *value > Decimal::from(MAX_UNIT_PRICE) {
        let mut error = ValidationError::new("unit_price");
        error.add_param("value".into(), &value.to_string());
        error.add_param("max".into(), &MAX_UNIT_PRICE);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa brasileña
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    let normalized = value.trim().to_uppercase();
    if !PLATE_RE.is_match(&normalized) {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"ABC-1234 or ABC1D23".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=13).contains(&digits) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar año del vehículo (texto de 4 dígitos, hasta el año que viene)
pub fn validate_vehicle_year(value: &str) -> Result<(), ValidationError> {
    let max_year = Local::now().year() + 1;
    match value.trim().parse::<i32>() {
        Ok(year) if (1900..=max_year).contains(&year) => Ok(()),
        _ => {
            let mut error = ValidationError::new("vehicle_year");
            error.add_param("value".into(), &value.to_string());
            error.add_param("max".into(), &max_year);
            Err(error)
        }
    }
}

/// Imagen recibida como data URI (`data:image/jpeg;base64,...`)
#[derive(Debug, Clone, PartialEq)]
pub struct DataUriImage {
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Decodifica un data URI de imagen y devuelve su tipo y tamaño
pub fn parse_image_data_uri(value: &str, max_bytes: usize) -> Result<DataUriImage, ValidationError> {
    let captures = DATA_URI_RE.captures(value.trim()).ok_or_else(|| {
        let mut error = ValidationError::new("data_uri");
        error.add_param("format".into(), &"data:image/<type>;base64,<payload>".to_string());
        error
    })?;

    let payload: String = captures[2].chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(payload.as_bytes())
        .map_err(|_| ValidationError::new("base64"))?;

    if bytes.is_empty() || bytes.len() > max_bytes {
        let mut error = ValidationError::new("photo_size");
        error.add_param("max".into(), &max_bytes);
        error.add_param("actual".into(), &bytes.len());
        return Err(error);
    }

    Ok(DataUriImage {
        mime_type: captures[1].to_string(),
        size_bytes: bytes.len(),
    })
}

/// Validar la referencia de una foto: ruta/URL o data URI
pub fn validate_photo_source(value: &str, max_bytes: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.starts_with("data:") {
        return parse_image_data_uri(trimmed, max_bytes).map(|_| ());
    }
    if trimmed.starts_with('/') || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(());
    }
    let mut error = ValidationError::new("photo_source");
    error.add_param("value".into(), &trimmed.to_string());
    Err(error)
}
