//! Modelo de Quote (orçamento)
//!
//! Los totales de línea y del presupuesto son siempre derivados; ningún
//! tipo de entrada trae un `total`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::status::StatusDisplay;
use crate::utils::dates::BrDate;

/// Estado del presupuesto
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl StatusDisplay for QuoteStatus {
    fn all() -> &'static [Self] {
        &[
            QuoteStatus::Pending,
            QuoteStatus::Approved,
            QuoteStatus::Rejected,
            QuoteStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Approved => "approved",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Completed => "completed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pendente",
            QuoteStatus::Approved => "Aprovado",
            QuoteStatus::Rejected => "Rejeitado",
            QuoteStatus::Completed => "Concluído",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "yellow",
            QuoteStatus::Approved => "green",
            QuoteStatus::Rejected => "red",
            QuoteStatus::Completed => "blue",
        }
    }
}

/// Línea del presupuesto (servicio o pieza)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLineItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Quote principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub id: String,
    pub number: String,
    pub customer: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub vehicle: String,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<QuoteLineItem>,
    pub total: Decimal,
    pub status: QuoteStatus,
    pub created_at: BrDate,
    pub valid_until: Option<BrDate>,
    pub warranty_days: u32,
}

/// Línea de entrada: sin total, se calcula al guardar
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemInput {
    pub id: Option<String>,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Campos para crear un presupuesto
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub customer: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub vehicle: String,
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<LineItemInput>,
    pub status: QuoteStatus,
    /// Días de validez a partir de hoy
    pub validity_days: Option<u32>,
    pub warranty_days: u32,
}

/// Cambios parciales sobre un presupuesto
#[derive(Debug, Clone, Default)]
pub struct QuoteChanges {
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub vehicle: Option<String>,
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub notes: Option<String>,
    pub items: Option<Vec<LineItemInput>>,
    pub status: Option<QuoteStatus>,
    pub valid_until: Option<BrDate>,
    pub warranty_days: Option<u32>,
}

/// Descripción del vehículo como la arma el formulario:
/// "<marca> <modelo> <año> - <placa>"
pub fn describe_vehicle(
    brand: Option<&str>,
    model: Option<&str>,
    year: Option<&str>,
    plate: &str,
) -> String {
    let head = [brand, model, year]
        .iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if head.is_empty() {
        plate.to_string()
    } else {
        format!("{} - {}", head, plate)
    }
}

impl crate::models::status::HasStatus for Quote {
    type Status = QuoteStatus;

    fn status(&self) -> QuoteStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_vehicle() {
        assert_eq!(
            describe_vehicle(Some("Volkswagen"), Some("Gol"), Some("2020"), "ABC-1234"),
            "Volkswagen Gol 2020 - ABC-1234"
        );
        assert_eq!(describe_vehicle(None, Some("Uno"), None, "XYZ-5678"), "Uno - XYZ-5678");
        assert_eq!(describe_vehicle(None, None, None, "XYZ-5678"), "XYZ-5678");
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&QuoteStatus::Approved).unwrap();
        assert_eq!(json, format!("\"{}\"", QuoteStatus::Approved.code()));
    }
}
