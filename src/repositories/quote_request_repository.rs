use crate::models::quote_request::{
    NewQuoteRequest, QuoteRequest, QuoteRequestChanges, QuoteRequestStatus,
};
use crate::repositories::memory::{Entity, InMemoryRepository};
use crate::utils::dates::BrDate;
use crate::utils::numbering::{format_number, next_sequence, QUOTE_REQUEST_PREFIX};

impl Entity for QuoteRequest {
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

/// Repositorio de solicitudes de presupuesto en memoria
#[derive(Debug, Clone, Default)]
pub struct QuoteRequestRepository {
    requests: InMemoryRepository<QuoteRequest>,
}

impl QuoteRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_requests(requests: Vec<QuoteRequest>) -> Self {
        Self {
            requests: InMemoryRepository::from_items(requests),
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn list(&self) -> Vec<QuoteRequest> {
        self.requests.list()
    }

    pub fn as_slice(&self) -> &[QuoteRequest] {
        self.requests.as_slice()
    }

    pub fn get_by_id(&self, id: &str) -> Option<QuoteRequest> {
        self.requests.get_by_id(id)
    }

    pub fn create(&mut self, new_request: NewQuoteRequest) -> QuoteRequest {
        self.create_dated(new_request, BrDate::today())
    }

    /// Registra la solicitud como pendiente con la fecha dada
    pub fn create_dated(&mut self, new_request: NewQuoteRequest, today: BrDate) -> QuoteRequest {
        let sequence = next_sequence(self.requests.len());
        let id = sequence.to_string();
        if self.requests.contains_id(&id) {
            log::warn!(
                "⚠️ Id de solicitud '{}' ya existe (numeración por tamaño de colección)",
                id
            );
        }

        let request = QuoteRequest {
            id,
            number: format_number(QUOTE_REQUEST_PREFIX, today.year(), sequence),
            customer: new_request.customer,
            phone: new_request.phone,
            email: new_request.email,
            address: new_request.address,
            vehicle: new_request.vehicle,
            plate: new_request.plate,
            brand: new_request.brand,
            model: new_request.model,
            year: new_request.year,
            mileage: new_request.mileage,
            service_type: new_request.service_type,
            urgency: new_request.urgency,
            problem_description: new_request.problem_description,
            symptoms: new_request.symptoms,
            desired_services: new_request.desired_services,
            notes: new_request.notes,
            contact_preference: new_request.contact_preference,
            availability: new_request.availability,
            in_person_quote: new_request.in_person_quote,
            status: QuoteRequestStatus::Pending,
            created_at: today,
            reviewed_at: None,
            internal_notes: None,
        };

        log::info!("💾 Solicitud {} registrada para {}", request.number, request.plate);
        self.requests.push(request)
    }

    pub fn update(&mut self, id: &str, changes: QuoteRequestChanges) -> Option<QuoteRequest> {
        self.update_dated(id, changes, BrDate::today())
    }

    /// Mezcla los campos informados. La primera vez que la solicitud sale
    /// de `Pending` sin fecha de análisis se usa `today`.
    pub fn update_dated(
        &mut self,
        id: &str,
        changes: QuoteRequestChanges,
        today: BrDate,
    ) -> Option<QuoteRequest> {
        let request = self.requests.get_mut(id)?;

        if let Some(customer) = changes.customer {
            request.customer = customer;
        }
        if let Some(phone) = changes.phone {
            request.phone = phone;
        }
        if let Some(email) = changes.email {
            request.email = Some(email);
        }
        if let Some(address) = changes.address {
            request.address = Some(address);
        }
        if let Some(vehicle) = changes.vehicle {
            request.vehicle = vehicle;
        }
        if let Some(plate) = changes.plate {
            request.plate = plate;
        }
        if let Some(brand) = changes.brand {
            request.brand = Some(brand);
        }
        if let Some(model) = changes.model {
            request.model = Some(model);
        }
        if let Some(year) = changes.year {
            request.year = Some(year);
        }
        if let Some(mileage) = changes.mileage {
            request.mileage = Some(mileage);
        }
        if let Some(service_type) = changes.service_type {
            request.service_type = service_type;
        }
        if let Some(urgency) = changes.urgency {
            request.urgency = urgency;
        }
        if let Some(problem_description) = changes.problem_description {
            request.problem_description = problem_description;
        }
        if let Some(symptoms) = changes.symptoms {
            request.symptoms = Some(symptoms);
        }
        if let Some(desired_services) = changes.desired_services {
            request.desired_services = Some(desired_services);
        }
        if let Some(notes) = changes.notes {
            request.notes = Some(notes);
        }
        if let Some(contact_preference) = changes.contact_preference {
            request.contact_preference = contact_preference;
        }
        if let Some(availability) = changes.availability {
            request.availability = Some(availability);
        }
        if let Some(in_person_quote) = changes.in_person_quote {
            request.in_person_quote = in_person_quote;
        }
        if let Some(internal_notes) = changes.internal_notes {
            request.internal_notes = Some(internal_notes);
        }
        if let Some(reviewed_at) = changes.reviewed_at {
            request.reviewed_at = Some(reviewed_at);
        }
        if let Some(status) = changes.status {
            request.status = status;
            if status != QuoteRequestStatus::Pending && request.reviewed_at.is_none() {
                request.reviewed_at = Some(today);
            }
        }

        log::info!("💾 Solicitud {} actualizada", request.number);
        Some(request.clone())
    }

    pub fn set_status(&mut self, id: &str, status: QuoteRequestStatus) -> Option<QuoteRequest> {
        self.update(
            id,
            QuoteRequestChanges {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.requests.delete(id);
        if removed {
            log::info!("🗑️ Solicitud {} eliminada", id);
        }
        removed
    }

    /// Busca en número, cliente, vehículo y placa
    pub fn search(&self, term: &str) -> Vec<QuoteRequest> {
        self.requests.search(term)
    }

    pub fn filter_by_status(&self, status: QuoteRequestStatus) -> Vec<QuoteRequest> {
        self.requests.filter_by_status(status)
    }
}
