//! Almacén de la consola
//!
//! Reúne los repositorios de la aplicación. Es un valor normal: se crea
//! uno por proceso (o por test) y se comparte desde `AppState`.

use crate::repositories::quote_repository::QuoteRepository;
use crate::repositories::quote_request_repository::QuoteRequestRepository;
use crate::repositories::seed;
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Debug, Clone, Default)]
pub struct WorkshopStore {
    pub vehicles: VehicleRepository,
    pub quotes: QuoteRepository,
    pub quote_requests: QuoteRequestRepository,
}

impl WorkshopStore {
    /// Almacén vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Almacén con los datos de ejemplo de la consola
    pub fn with_sample_data() -> serde_json::Result<Self> {
        let store = Self {
            vehicles: VehicleRepository::from_vehicles(seed::sample_vehicles()?),
            quotes: QuoteRepository::from_quotes(seed::sample_quotes()?),
            quote_requests: QuoteRequestRepository::from_requests(seed::sample_quote_requests()?),
        };

        log::info!(
            "🌱 Datos de ejemplo cargados: {} vehículos, {} servicios, {} presupuestos, {} solicitudes",
            store.vehicles.len(),
            store.vehicles.service_count(),
            store.quotes.len(),
            store.quote_requests.len()
        );
        Ok(store)
    }
}
