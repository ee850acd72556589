//! Modelo de QuoteRequest (solicitação de orçamento)
//!
//! Formulario público sin precios, precursor de un `Quote`.

use serde::{Deserialize, Serialize};

use crate::models::status::StatusDisplay;
use crate::utils::dates::BrDate;

/// Tipo de servicio solicitado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Revision,
    Repair,
    Maintenance,
    PartsReplacement,
    Diagnosis,
    Other,
}

impl StatusDisplay for ServiceType {
    fn all() -> &'static [Self] {
        &[
            ServiceType::Revision,
            ServiceType::Repair,
            ServiceType::Maintenance,
            ServiceType::PartsReplacement,
            ServiceType::Diagnosis,
            ServiceType::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ServiceType::Revision => "revision",
            ServiceType::Repair => "repair",
            ServiceType::Maintenance => "maintenance",
            ServiceType::PartsReplacement => "parts_replacement",
            ServiceType::Diagnosis => "diagnosis",
            ServiceType::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ServiceType::Revision => "Revisão Periódica",
            ServiceType::Repair => "Reparo/Conserto",
            ServiceType::Maintenance => "Manutenção",
            ServiceType::PartsReplacement => "Troca de Peças",
            ServiceType::Diagnosis => "Diagnóstico",
            ServiceType::Other => "Outros",
        }
    }

    fn color(&self) -> &'static str {
        "gray"
    }
}

/// Urgencia declarada por el cliente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl StatusDisplay for Urgency {
    fn all() -> &'static [Self] {
        &[Urgency::Low, Urgency::Medium, Urgency::High, Urgency::Emergency]
    }

    fn code(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Emergency => "emergency",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Baixa",
            Urgency::Medium => "Média",
            Urgency::High => "Alta",
            Urgency::Emergency => "Emergência",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Urgency::Low => "green",
            Urgency::Medium => "yellow",
            Urgency::High => "orange",
            Urgency::Emergency => "red",
        }
    }
}

/// Canal de contacto preferido
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    Phone,
    Email,
    Whatsapp,
}

/// Estado de la solicitud
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuoteRequestStatus {
    Pending,
    InReview,
    QuoteSent,
    Accepted,
    Rejected,
}

impl StatusDisplay for QuoteRequestStatus {
    fn all() -> &'static [Self] {
        &[
            QuoteRequestStatus::Pending,
            QuoteRequestStatus::InReview,
            QuoteRequestStatus::QuoteSent,
            QuoteRequestStatus::Accepted,
            QuoteRequestStatus::Rejected,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            QuoteRequestStatus::Pending => "pending",
            QuoteRequestStatus::InReview => "in_review",
            QuoteRequestStatus::QuoteSent => "quote_sent",
            QuoteRequestStatus::Accepted => "accepted",
            QuoteRequestStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            QuoteRequestStatus::Pending => "Pendente",
            QuoteRequestStatus::InReview => "Em Análise",
            QuoteRequestStatus::QuoteSent => "Orçamento Enviado",
            QuoteRequestStatus::Accepted => "Aceito",
            QuoteRequestStatus::Rejected => "Rejeitado",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            QuoteRequestStatus::Pending => "yellow",
            QuoteRequestStatus::InReview => "blue",
            QuoteRequestStatus::QuoteSent => "purple",
            QuoteRequestStatus::Accepted => "green",
            QuoteRequestStatus::Rejected => "red",
        }
    }
}

/// QuoteRequest principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteRequest {
    pub id: String,
    pub number: String,

    // Datos del cliente
    pub customer: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,

    // Datos del vehículo
    pub vehicle: String,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub mileage: Option<String>,

    // Detalle del servicio
    pub service_type: ServiceType,
    pub urgency: Urgency,
    pub problem_description: String,
    pub symptoms: Option<String>,
    pub desired_services: Option<String>,
    pub notes: Option<String>,

    // Preferencias
    pub contact_preference: ContactPreference,
    pub availability: Option<String>,
    pub in_person_quote: bool,

    // Metadatos
    pub status: QuoteRequestStatus,
    pub created_at: BrDate,
    pub reviewed_at: Option<BrDate>,
    pub internal_notes: Option<String>,
}

/// Campos para registrar una solicitud
#[derive(Debug, Clone)]
pub struct NewQuoteRequest {
    pub customer: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub vehicle: String,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub service_type: ServiceType,
    pub urgency: Urgency,
    pub problem_description: String,
    pub symptoms: Option<String>,
    pub desired_services: Option<String>,
    pub notes: Option<String>,
    pub contact_preference: ContactPreference,
    pub availability: Option<String>,
    pub in_person_quote: bool,
}

/// Cambios parciales sobre una solicitud
#[derive(Debug, Clone, Default)]
pub struct QuoteRequestChanges {
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub vehicle: Option<String>,
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub service_type: Option<ServiceType>,
    pub urgency: Option<Urgency>,
    pub problem_description: Option<String>,
    pub symptoms: Option<String>,
    pub desired_services: Option<String>,
    pub notes: Option<String>,
    pub contact_preference: Option<ContactPreference>,
    pub availability: Option<String>,
    pub in_person_quote: Option<bool>,
    pub status: Option<QuoteRequestStatus>,
    pub reviewed_at: Option<BrDate>,
    pub internal_notes: Option<String>,
}

impl crate::models::status::HasStatus for QuoteRequest {
    type Status = QuoteRequestStatus;

    fn status(&self) -> QuoteRequestStatus {
        self.status
    }
}
