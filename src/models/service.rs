//! Modelo de Service (ordem de serviço)
//!
//! Un servicio es una unidad de trabajo sobre un vehículo, con estado,
//! prioridad y fotos. Vive embebido en su `Vehicle`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::status::StatusDisplay;
use crate::utils::dates::{BrDate, BrDateTime};

/// Estado del servicio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Pending,
    InProgress,
    Completed,
    AwaitingParts,
}

impl StatusDisplay for ServiceStatus {
    fn all() -> &'static [Self] {
        &[
            ServiceStatus::Pending,
            ServiceStatus::InProgress,
            ServiceStatus::AwaitingParts,
            ServiceStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::InProgress => "in_progress",
            ServiceStatus::Completed => "completed",
            ServiceStatus::AwaitingParts => "awaiting_parts",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "Pendente",
            ServiceStatus::InProgress => "Em Andamento",
            ServiceStatus::Completed => "Concluído",
            ServiceStatus::AwaitingParts => "Aguardando Peças",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "yellow",
            ServiceStatus::InProgress => "blue",
            ServiceStatus::Completed => "green",
            ServiceStatus::AwaitingParts => "orange",
        }
    }
}

/// Prioridad del servicio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl StatusDisplay for Priority {
    fn all() -> &'static [Self] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    fn code(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Média",
            Priority::High => "Alta",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Priority::Low => "green",
            Priority::Medium => "yellow",
            Priority::High => "red",
        }
    }
}

/// Momento del servicio en que se tomó la foto
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhotoKind {
    Before,
    During,
    After,
}

impl StatusDisplay for PhotoKind {
    fn all() -> &'static [Self] {
        &[PhotoKind::Before, PhotoKind::During, PhotoKind::After]
    }

    fn code(&self) -> &'static str {
        match self {
            PhotoKind::Before => "before",
            PhotoKind::During => "during",
            PhotoKind::After => "after",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PhotoKind::Before => "Antes",
            PhotoKind::During => "Durante",
            PhotoKind::After => "Depois",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            PhotoKind::Before => "gray",
            PhotoKind::During => "blue",
            PhotoKind::After => "green",
        }
    }
}

/// Foto del servicio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    /// Ruta, URL o data URI en base64
    pub url: String,
    pub kind: PhotoKind,
    pub description: String,
    pub taken_at: BrDateTime,
}

/// Service principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub order_ref: String,
    pub vehicle: String,
    pub plate: String,
    pub description: String,
    pub entry_date: BrDate,
    pub exit_date: Option<BrDate>,
    pub expected_delivery: Option<BrDate>,
    pub status: ServiceStatus,
    pub priority: Priority,
    pub value: Option<Decimal>,
    pub notes: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Service {
    /// Número de fotos de un tipo
    pub fn photo_count(&self, kind: PhotoKind) -> usize {
        self.photos.iter().filter(|p| p.kind == kind).count()
    }
}

/// Campos para crear un servicio; vehículo y placa vienen del dueño
#[derive(Debug, Clone, Default)]
pub struct NewService {
    pub description: String,
    pub entry_date: Option<BrDate>,
    pub expected_delivery: Option<BrDate>,
    pub status: Option<ServiceStatus>,
    pub priority: Option<Priority>,
    pub value: Option<Decimal>,
    pub notes: Option<String>,
}

/// Cambios parciales sobre un servicio
#[derive(Debug, Clone, Default)]
pub struct ServiceChanges {
    pub description: Option<String>,
    pub entry_date: Option<BrDate>,
    pub exit_date: Option<BrDate>,
    pub expected_delivery: Option<BrDate>,
    pub status: Option<ServiceStatus>,
    pub priority: Option<Priority>,
    pub value: Option<Decimal>,
    pub notes: Option<String>,
}

/// Campos para adjuntar una foto
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub url: String,
    pub kind: PhotoKind,
    pub description: String,
    pub taken_at: Option<BrDateTime>,
}

impl crate::models::status::HasStatus for Service {
    type Status = ServiceStatus;

    fn status(&self) -> ServiceStatus {
        self.status
    }
}
