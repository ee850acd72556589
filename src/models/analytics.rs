//! Modelos de Analytics
//!
//! Este módulo contiene los resúmenes que consume el dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::dates::BrDate;

/// Fila del gráfico de estados
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusBreakdownItem {
    pub code: String,
    pub label: String,
    pub color: String,
    pub count: usize,
    pub percentage: u32,
}

/// Resumen de servicios
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServiceSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub awaiting_parts: usize,
    pub completed: usize,
    pub overdue: usize,
    pub completed_percentage: u32,
    pub overdue_percentage: u32,
    pub breakdown: Vec<StatusBreakdownItem>,
}

/// Próxima entrega prevista
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpcomingDelivery {
    pub order_ref: String,
    pub vehicle: String,
    pub plate: String,
    pub expected_delivery: BrDate,
    pub overdue: bool,
}

/// Conteo y valor por estado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusTotal {
    pub code: String,
    pub label: String,
    pub count: usize,
    pub total_value: Decimal,
}

/// Resumen de presupuestos
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteSummary {
    pub total: usize,
    pub by_status: Vec<StatusTotal>,
}

/// Conteo por código
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CodeCount {
    pub code: String,
    pub label: String,
    pub count: usize,
}

/// Resumen de solicitudes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteRequestSummary {
    pub total: usize,
    pub by_status: Vec<CodeCount>,
    pub by_urgency: Vec<CodeCount>,
}

/// Resumen completo para el dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub date: BrDate,
    pub vehicles: usize,
    pub services: ServiceSummary,
    pub upcoming_deliveries: Vec<UpcomingDelivery>,
    pub quotes: QuoteSummary,
    pub quote_requests: QuoteRequestSummary,
}
