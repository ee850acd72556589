use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::service::{
    NewPhoto, NewService, PhotoKind, Priority, Service, ServiceChanges, ServiceStatus,
};
use crate::services::statistics::service_slug;
use crate::utils::dates::{BrDate, BrDateTime};
use crate::utils::validation::{validate_non_negative, validate_not_blank};

// Request para abrir una orden de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(custom = "validate_not_blank")]
    pub description: String,
    pub entry_date: Option<BrDate>,
    pub expected_delivery: Option<BrDate>,
    pub status: Option<ServiceStatus>,
    pub priority: Option<Priority>,
    #[validate(custom = "validate_non_negative")]
    pub value: Option<Decimal>,
    pub notes: Option<String>,
}

impl From<CreateServiceRequest> for NewService {
    fn from(request: CreateServiceRequest) -> Self {
        Self {
            description: request.description,
            entry_date: request.entry_date,
            expected_delivery: request.expected_delivery,
            status: request.status,
            priority: request.priority,
            value: request.value,
            notes: request.notes,
        }
    }
}

// Request para actualizar una orden
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(custom = "validate_not_blank")]
    pub description: Option<String>,
    pub entry_date: Option<BrDate>,
    pub exit_date: Option<BrDate>,
    pub expected_delivery: Option<BrDate>,
    pub status: Option<ServiceStatus>,
    pub priority: Option<Priority>,
    #[validate(custom = "validate_non_negative")]
    pub value: Option<Decimal>,
    pub notes: Option<String>,
}

impl From<UpdateServiceRequest> for ServiceChanges {
    fn from(request: UpdateServiceRequest) -> Self {
        Self {
            description: request.description,
            entry_date: request.entry_date,
            exit_date: request.exit_date,
            expected_delivery: request.expected_delivery,
            status: request.status,
            priority: request.priority,
            value: request.value,
            notes: request.notes,
        }
    }
}

// Foto tomada con la cámara o subida como archivo
#[derive(Debug, Deserialize, Validate)]
pub struct AddPhotoRequest {
    /// Ruta, URL o data URI; el tamaño se valida en el controlador
    pub url: String,
    pub kind: PhotoKind,
    #[serde(default)]
    pub description: String,
    pub taken_at: Option<BrDateTime>,
}

impl From<AddPhotoRequest> for NewPhoto {
    fn from(request: AddPhotoRequest) -> Self {
        Self {
            url: request.url.trim().to_string(),
            kind: request.kind,
            description: request.description,
            taken_at: request.taken_at,
        }
    }
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct ServiceListQuery {
    pub status: Option<ServiceStatus>,
    pub plate: Option<String>,
    pub q: Option<String>,
}

// Response de servicio con los datos derivados de la ficha
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    #[serde(flatten)]
    pub service: Service,
    pub slug: String,
    pub photos_before: usize,
    pub photos_during: usize,
    pub photos_after: usize,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            slug: service_slug(&service),
            photos_before: service.photo_count(PhotoKind::Before),
            photos_during: service.photo_count(PhotoKind::During),
            photos_after: service.photo_count(PhotoKind::After),
            service,
        }
    }
}
