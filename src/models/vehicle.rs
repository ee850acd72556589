//! Modelo de Vehicle
//!
//! Un vehículo es dueño de sus servicios (embebidos). La placa no se
//! fuerza como única.

use serde::{Deserialize, Serialize};

use crate::models::service::Service;
use crate::utils::dates::BrDate;

/// Vehicle principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    /// Nombre para mostrar, p. ej. "Volkswagen Gol"
    pub name: String,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Vehicle {
    /// Fecha de entrada del servicio más reciente
    pub fn last_service_date(&self) -> Option<BrDate> {
        self.services.iter().map(|s| s.entry_date).max()
    }
}

/// Campos para registrar un vehículo
#[derive(Debug, Clone, Default)]
pub struct NewVehicle {
    pub name: Option<String>,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
}

impl NewVehicle {
    /// Nombre explícito o "<marca> <modelo>"; si no hay nada, la placa
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let composed = [self.brand.as_deref(), self.model.as_deref()]
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if composed.is_empty() {
            self.plate.clone()
        } else {
            composed
        }
    }
}

/// Cambios parciales sobre un vehículo
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub name: Option<String>,
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
}
