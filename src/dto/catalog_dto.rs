use serde::Serialize;

use crate::models::quote::QuoteStatus;
use crate::models::quote_request::{QuoteRequestStatus, ServiceType, Urgency};
use crate::models::service::{PhotoKind, Priority, ServiceStatus};
use crate::models::status::StatusEntry;

// Tabla de etiquetas y colores para la consola
#[derive(Debug, Serialize)]
pub struct StatusCatalog {
    pub service_status: Vec<StatusEntry>,
    pub priority: Vec<StatusEntry>,
    pub photo_kind: Vec<StatusEntry>,
    pub quote_status: Vec<StatusEntry>,
    pub quote_request_status: Vec<StatusEntry>,
    pub service_type: Vec<StatusEntry>,
    pub urgency: Vec<StatusEntry>,
}

impl StatusCatalog {
    pub fn build() -> Self {
        Self {
            service_status: StatusEntry::table::<ServiceStatus>(),
            priority: StatusEntry::table::<Priority>(),
            photo_kind: StatusEntry::table::<PhotoKind>(),
            quote_status: StatusEntry::table::<QuoteStatus>(),
            quote_request_status: StatusEntry::table::<QuoteRequestStatus>(),
            service_type: StatusEntry::table::<ServiceType>(),
            urgency: StatusEntry::table::<Urgency>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_value() {
        let catalog = StatusCatalog::build();
        assert_eq!(catalog.service_status.len(), 4);
        assert_eq!(catalog.quote_request_status.len(), 5);
        assert_eq!(catalog.urgency[3].label, "Emergência");
        assert_eq!(catalog.quote_status[0].badge_class, "bg-yellow-100 text-yellow-800 border-yellow-200");
    }
}
