use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::models::quote::{describe_vehicle, LineItemInput, NewQuote, QuoteChanges, QuoteStatus};
use crate::utils::dates::BrDate;
use crate::utils::validation::{validate_not_blank, validate_unit_price, validate_vehicle_year};

// Línea de presupuesto recibida del formulario
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LineItemRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, max = 10000))]
    pub quantity: u32,
    #[validate(custom = "validate_unit_price")]
    pub unit_price: Decimal,
}

impl From<LineItemRequest> for LineItemInput {
    fn from(item: LineItemRequest) -> Self {
        Self {
            id: item.id,
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

// Request para crear un presupuesto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[validate(custom = "validate_not_blank")]
    pub customer: String,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    /// Si no viene se arma con marca, modelo, año y placa
    pub vehicle: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(custom = "validate_vehicle_year")]
    pub year: Option<String>,
    pub notes: Option<String>,
    #[validate]
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
    pub status: Option<QuoteStatus>,
    #[validate(range(min = 1, max = 3650))]
    pub validity_days: Option<u32>,
    #[validate(range(max = 3650))]
    pub warranty_days: Option<u32>,
}

impl CreateQuoteRequest {
    /// Completa los valores por defecto de la configuración
    pub fn into_new_quote(self, config: &EnvironmentConfig) -> NewQuote {
        let vehicle = self
            .vehicle
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                describe_vehicle(
                    self.brand.as_deref(),
                    self.model.as_deref(),
                    self.year.as_deref(),
                    &self.plate,
                )
            });

        NewQuote {
            customer: self.customer,
            phone: self.phone,
            email: self.email,
            vehicle,
            plate: self.plate,
            brand: self.brand,
            model: self.model,
            year: self.year,
            notes: self.notes,
            items: self.items.into_iter().map(LineItemInput::from).collect(),
            status: self.status.unwrap_or(QuoteStatus::Pending),
            validity_days: Some(
                self.validity_days
                    .unwrap_or(config.default_quote_validity_days),
            ),
            warranty_days: self.warranty_days.unwrap_or(config.default_warranty_days),
        }
    }
}

// Request para actualizar un presupuesto
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateQuoteRequest {
    #[validate(custom = "validate_not_blank")]
    pub customer: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub vehicle: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(custom = "validate_vehicle_year")]
    pub year: Option<String>,
    pub notes: Option<String>,
    /// Se valida línea por línea en el controlador
    pub items: Option<Vec<LineItemRequest>>,
    pub status: Option<QuoteStatus>,
    pub valid_until: Option<BrDate>,
    #[validate(range(max = 3650))]
    pub warranty_days: Option<u32>,
}

impl From<UpdateQuoteRequest> for QuoteChanges {
    fn from(request: UpdateQuoteRequest) -> Self {
        Self {
            customer: request.customer,
            phone: request.phone,
            email: request.email,
            vehicle: request.vehicle,
            plate: request.plate,
            brand: request.brand,
            model: request.model,
            year: request.year,
            notes: request.notes,
            items: request
                .items
                .map(|items| items.into_iter().map(LineItemInput::from).collect()),
            status: request.status,
            valid_until: request.valid_until,
            warranty_days: request.warranty_days,
        }
    }
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct QuoteListQuery {
    pub status: Option<QuoteStatus>,
    pub q: Option<String>,
}

// Cambio de estado
#[derive(Debug, Deserialize)]
pub struct QuoteStatusRequest {
    pub status: QuoteStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CreateQuoteRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_into_new_quote_fills_defaults() {
        let new_quote = request(serde_json::json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "brand": "Volkswagen",
            "model": "Gol",
            "year": "2020",
            "items": [{ "description": "Óleo", "quantity": 1, "unit_price": 45.0 }]
        }))
        .into_new_quote(&EnvironmentConfig::default());

        assert_eq!(new_quote.vehicle, "Volkswagen Gol 2020 - ABC-1234");
        assert_eq!(new_quote.status, QuoteStatus::Pending);
        assert_eq!(new_quote.validity_days, Some(10));
        assert_eq!(new_quote.warranty_days, 90);
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        let bad = request(serde_json::json!({
            "customer": "  ",
            "plate": "ABC-1234",
            "email": "not-an-email",
            "items": [{ "description": "Óleo", "quantity": 0, "unit_price": -1.0 }]
        }));
        let errors = bad.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("customer"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("items"));
    }

    #[test]
    fn test_validation_bounds_quantity_price_and_days() {
        let bad = request(serde_json::json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "validity_days": 4000000000u64,
            "items": [{ "description": "Peça", "quantity": 4000000000u64, "unit_price": 1e20 }]
        }));
        let errors = bad.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("validity_days"));
        assert!(fields.contains_key("items"));

        let ok = request(serde_json::json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "validity_days": 3650,
            "items": [{ "description": "Peça", "quantity": 10000, "unit_price": 1000000000 }]
        }));
        assert!(ok.validate().is_ok());
    }
}
