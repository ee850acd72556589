use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::utils::dates::BrDate;
use crate::utils::validation::{validate_not_blank, validate_plate, validate_vehicle_year};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub name: Option<String>,
    #[validate(custom = "validate_plate")]
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(custom = "validate_vehicle_year")]
    pub year: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            name: request.name,
            plate: request.plate.trim().to_uppercase(),
            brand: request.brand,
            model: request.model,
            year: request.year,
            notes: request.notes,
        }
    }
}

// Request para actualizar un vehículo
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: Option<String>,
    #[validate(custom = "validate_plate")]
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(custom = "validate_vehicle_year")]
    pub year: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateVehicleRequest> for VehicleChanges {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            name: request.name,
            plate: request.plate.map(|p| p.trim().to_uppercase()),
            brand: request.brand,
            model: request.model,
            year: request.year,
            notes: request.notes,
        }
    }
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct VehicleListQuery {
    pub q: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub service_count: usize,
    pub last_service_date: Option<BrDate>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            service_count: vehicle.services.len(),
            last_service_date: vehicle.last_service_date(),
            vehicle,
        }
    }
}
