use serde::Deserialize;
use validator::Validate;

use crate::models::quote_request::{
    ContactPreference, NewQuoteRequest, QuoteRequestChanges, QuoteRequestStatus, ServiceType,
    Urgency,
};
use crate::utils::dates::BrDate;
use crate::utils::validation::{
    validate_not_blank, validate_phone, validate_plate, validate_vehicle_year,
};

// Formulario público de solicitud de presupuesto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteRequestForm {
    #[validate(custom = "validate_not_blank")]
    pub customer: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
    /// Si no viene se arma con marca, modelo y año
    pub vehicle: Option<String>,
    #[validate(custom = "validate_plate")]
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(custom = "validate_vehicle_year")]
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub service_type: ServiceType,
    pub urgency: Urgency,
    #[validate(custom = "validate_not_blank")]
    pub problem_description: String,
    pub symptoms: Option<String>,
    pub desired_services: Option<String>,
    pub notes: Option<String>,
    pub contact_preference: ContactPreference,
    pub availability: Option<String>,
    #[serde(default)]
    pub in_person_quote: bool,
}

impl From<CreateQuoteRequestForm> for NewQuoteRequest {
    fn from(form: CreateQuoteRequestForm) -> Self {
        let vehicle = form
            .vehicle
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                [form.brand.as_deref(), form.model.as_deref(), form.year.as_deref()]
                    .iter()
                    .flatten()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            });

        Self {
            customer: form.customer.trim().to_string(),
            phone: form.phone,
            email: form.email,
            address: form.address,
            vehicle,
            plate: form.plate.trim().to_uppercase(),
            brand: form.brand,
            model: form.model,
            year: form.year,
            mileage: form.mileage,
            service_type: form.service_type,
            urgency: form.urgency,
            problem_description: form.problem_description,
            symptoms: form.symptoms,
            desired_services: form.desired_services,
            notes: form.notes,
            contact_preference: form.contact_preference,
            availability: form.availability,
            in_person_quote: form.in_person_quote,
        }
    }
}

// Actualización interna de una solicitud
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateQuoteRequestForm {
    #[validate(custom = "validate_not_blank")]
    pub customer: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
    pub vehicle: Option<String>,
    #[validate(custom = "validate_plate")]
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(custom = "validate_vehicle_year")]
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub service_type: Option<ServiceType>,
    pub urgency: Option<Urgency>,
    #[validate(custom = "validate_not_blank")]
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

impl From<UpdateQuoteRequestForm> for QuoteRequestChanges {
    fn from(form: UpdateQuoteRequestForm) -> Self {
        Self {
            customer: form.customer,
            phone: form.phone,
            email: form.email,
            address: form.address,
            vehicle: form.vehicle,
            plate: form.plate.map(|p| p.trim().to_uppercase()),
            brand: form.brand,
            model: form.model,
            year: form.year,
            mileage: form.mileage,
            service_type: form.service_type,
            urgency: form.urgency,
            problem_description: form.problem_description,
            symptoms: form.symptoms,
            desired_services: form.desired_services,
            notes: form.notes,
            contact_preference: form.contact_preference,
            availability: form.availability,
            in_person_quote: form.in_person_quote,
            status: form.status,
            reviewed_at: form.reviewed_at,
            internal_notes: form.internal_notes,
        }
    }
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequestListQuery {
    pub status: Option<QuoteRequestStatus>,
    pub q: Option<String>,
}

// Cambio de estado
#[derive(Debug, Deserialize)]
pub struct QuoteRequestStatusRequest {
    pub status: QuoteRequestStatus,
    pub internal_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(overrides: serde_json::Value) -> CreateQuoteRequestForm {
        let mut base = json!({
            "customer": "Carlos Eduardo",
            "phone": "(11) 99999-8888",
            "plate": "hon-1234",
            "brand": "Honda",
            "model": "Civic",
            "year": "2018",
            "service_type": "revision",
            "urgency": "medium",
            "problem_description": "Barulho na suspensão",
            "contact_preference": "whatsapp"
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_valid_form_converts() {
        let form = form(json!({}));
        assert!(form.validate().is_ok());

        let new_request = NewQuoteRequest::from(form);
        assert_eq!(new_request.vehicle, "Honda Civic 2018");
        assert_eq!(new_request.plate, "HON-1234");
        assert!(!new_request.in_person_quote);
    }

    #[test]
    fn test_required_fields() {
        let form = form(json!({ "customer": " ", "phone": "123", "problem_description": "" }));
        let errors = form.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("customer"));
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("problem_description"));
        assert!(!fields.contains_key("plate"));
    }

    #[test]
    fn test_update_form_carries_every_editable_field() {
        let update: UpdateQuoteRequestForm = serde_json::from_value(json!({
            "brand": "Toyota",
            "model": "Corolla",
            "year": "2017",
            "mileage": "120000",
            "desired_services": "Revisão geral",
            "contact_preference": "email",
            "in_person_quote": true
        }))
        .unwrap();
        assert!(update.validate().is_ok());

        let changes = QuoteRequestChanges::from(update);
        assert_eq!(changes.brand.as_deref(), Some("Toyota"));
        assert_eq!(changes.model.as_deref(), Some("Corolla"));
        assert_eq!(changes.year.as_deref(), Some("2017"));
        assert_eq!(changes.mileage.as_deref(), Some("120000"));
        assert_eq!(changes.desired_services.as_deref(), Some("Revisão geral"));
        assert_eq!(changes.contact_preference, Some(ContactPreference::Email));
        assert_eq!(changes.in_person_quote, Some(true));

        let bad_year: UpdateQuoteRequestForm =
            serde_json::from_value(json!({ "year": "19" })).unwrap();
        assert!(bad_year.validate().is_err());
    }
}
