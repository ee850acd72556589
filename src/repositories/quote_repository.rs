use crate::models::quote::{NewQuote, Quote, QuoteChanges, QuoteStatus};
use crate::repositories::memory::{Entity, InMemoryRepository};
use crate::services::quote_calculator::{build_line_items, quote_total};
use crate::utils::dates::BrDate;
use crate::utils::numbering::{format_number, next_sequence, QUOTE_PREFIX};

impl Entity for Quote {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.customer.as_str(),
            self.vehicle.as_str(),
            self.plate.as_str(),
        ]
    }
}

/// Repositorio de presupuestos en memoria
#[derive(Debug, Clone, Default)]
pub struct QuoteRepository {
    quotes: InMemoryRepository<Quote>,
}

impl QuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: InMemoryRepository::from_items(quotes),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn list(&self) -> Vec<Quote> {
        self.quotes.list()
    }

    pub fn as_slice(&self) -> &[Quote] {
        self.quotes.as_slice()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Quote> {
        self.quotes.get_by_id(id)
    }

    /// Crea un presupuesto con fecha de hoy
    pub fn create(&mut self, new_quote: NewQuote) -> Quote {
        self.create_dated(new_quote, BrDate::today())
    }

    /// Crea un presupuesto con la fecha de creación dada.
    /// Asigna id y número, calcula totales y la fecha de validez.
    pub fn create_dated(&mut self, new_quote: NewQuote, today: BrDate) -> Quote {
        let sequence = next_sequence(self.quotes.len());
        let id = sequence.to_string();
        if self.quotes.contains_id(&id) {
            log::warn!(
                "⚠️ Id de presupuesto '{}' ya existe (numeración por tamaño de colección)",
                id
            );
        }

        let items = build_line_items(new_quote.items);
        let total = quote_total(&items);
        let valid_until = new_quote.validity_days.and_then(|days| {
            let date = today.plus_days(days);
            if date.is_none() {
                log::warn!("⚠️ Validez de {} días fuera de rango, presupuesto sin vencimiento", days);
            }
            date
        });

        let quote = Quote {
            id,
            number: format_number(QUOTE_PREFIX, today.year(), sequence),
            customer: new_quote.customer,
            phone: new_quote.phone,
            email: new_quote.email,
            vehicle: new_quote.vehicle,
            plate: new_quote.plate,
            brand: new_quote.brand,
            model: new_quote.model,
            year: new_quote.year,
            notes: new_quote.notes,
            items,
            total,
            status: new_quote.status,
            created_at: today,
            valid_until,
            warranty_days: new_quote.warranty_days,
        };

        log::info!("💾 Presupuesto {} creado (total {})", quote.number, quote.total);
        self.quotes.push(quote)
    }

    /// Mezcla los campos informados; si cambian las líneas se recalculan
    /// los totales
    pub fn update(&mut self, id: &str, changes: QuoteChanges) -> Option<Quote> {
        let quote = self.quotes.get_mut(id)?;

        if let Some(customer) = changes.customer {
            quote.customer = customer;
        }
        if let Some(phone) = changes.phone {
            quote.phone = Some(phone);
        }
        if let Some(email) = changes.email {
            quote.email = Some(email);
        }
        if let Some(vehicle) = changes.vehicle {
            quote.vehicle = vehicle;
        }
        if let Some(plate) = changes.plate {
            quote.plate = plate;
        }
        if let Some(brand) = changes.brand {
            quote.brand = Some(brand);
        }
        if let Some(model) = changes.model {
            quote.model = Some(model);
        }
        if let Some(year) = changes.year {
            quote.year = Some(year);
        }
        if let Some(notes) = changes.notes {
            quote.notes = Some(notes);
        }
        if let Some(items) = changes.items {
            quote.items = build_line_items(items);
            quote.total = quote_total(&quote.items);
        }
        if let Some(status) = changes.status {
            quote.status = status;
        }
        if let Some(valid_until) = changes.valid_until {
            quote.valid_until = Some(valid_until);
        }
        if let Some(warranty_days) = changes.warranty_days {
            quote.warranty_days = warranty_days;
        }

        log::info!("💾 Presupuesto {} actualizado", quote.number);
        Some(quote.clone())
    }

    pub fn set_status(&mut self, id: &str, status: QuoteStatus) -> Option<Quote> {
        self.update(
            id,
            QuoteChanges {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.quotes.delete(id);
        if removed {
            log::info!("🗑️ Presupuesto {} eliminado", id);
        }
        removed
    }

    /// Busca en número, cliente, vehículo y placa
    pub fn search(&self, term: &str) -> Vec<Quote> {
        self.quotes.search(term)
    }

    pub fn filter_by_status(&self, status: QuoteStatus) -> Vec<Quote> {
        self.quotes.filter_by_status(status)
    }
}
