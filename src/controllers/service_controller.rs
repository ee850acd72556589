use std::sync::Arc;

use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::api_response::ApiResponse;
use crate::dto::service_dto::{AddPhotoRequest, ServiceListQuery, ServiceResponse, UpdateServiceRequest};
use crate::models::service::{NewPhoto, Photo, ServiceChanges};
use crate::state::{AppState, SharedStore};
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::validate_photo_source;

pub struct ServiceController {
    store: SharedStore,
    config: Arc<EnvironmentConfig>,
}

impl ServiceController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            config: state.config.clone(),
        }
    }

    /// Filtros combinables: estado, placa y texto libre
    pub async fn list(&self, query: ServiceListQuery) -> AppResult<Vec<ServiceResponse>> {
        let store = self.store.read().await;
        let term = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
        let plate = query.plate.as_deref().map(str::trim).filter(|p| !p.is_empty());

        let mut services = match (term, plate, query.status) {
            (Some(term), _, _) => store.vehicles.search_services(term),
            (None, Some(plate), _) => store.vehicles.services_by_plate(plate),
            (None, None, Some(status)) => store.vehicles.services_by_status(status),
            (None, None, None) => store.vehicles.services(),
        };

        if let Some(plate) = plate {
            let plate = plate.to_lowercase();
            services.retain(|s| s.plate.to_lowercase().contains(&plate));
        }
        if let Some(status) = query.status {
            services.retain(|s| s.status == status);
        }

        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn get_by_order(&self, order_ref: &str) -> AppResult<ServiceResponse> {
        self.store
            .read()
            .await
            .vehicles
            .service_by_order(order_ref)
            .map(ServiceResponse::from)
            .ok_or_else(|| not_found_error("Service", order_ref))
    }

    pub async fn update(
        &self,
        order_ref: &str,
        request: UpdateServiceRequest,
    ) -> AppResult<ApiResponse<ServiceResponse>> {
        request.validate()?;

        let service = self
            .store
            .write()
            .await
            .vehicles
            .update_service(order_ref, ServiceChanges::from(request))
            .ok_or_else(|| not_found_error("Service", order_ref))?;
        Ok(ApiResponse::success_with_message(
            ServiceResponse::from(service),
            "Serviço atualizado com sucesso",
        ))
    }

    pub async fn delete(&self, order_ref: &str) -> AppResult<ApiResponse<()>> {
        if !self.store.write().await.vehicles.remove_service(order_ref) {
            return Err(not_found_error("Service", order_ref));
        }
        Ok(ApiResponse::message("Serviço excluído com sucesso"))
    }

    /// Adjunta una foto; los data URI se decodifican para validar tamaño
    pub async fn add_photo(
        &self,
        order_ref: &str,
        request: AddPhotoRequest,
    ) -> AppResult<ApiResponse<Photo>> {
        request.validate()?;
        validate_photo_source(&request.url, self.config.max_photo_bytes).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("url", e);
            AppError::Validation(errors)
        })?;

        let photo = self
            .store
            .write()
            .await
            .vehicles
            .add_photo(order_ref, NewPhoto::from(request))
            .ok_or_else(|| not_found_error("Service", order_ref))?;
        Ok(ApiResponse::success_with_message(photo, "Foto adicionada com sucesso"))
    }

    pub async fn remove_photo(&self, order_ref: &str, photo_id: &str) -> AppResult<ApiResponse<()>> {
        if !self
            .store
            .write()
            .await
            .vehicles
            .remove_photo(order_ref, photo_id)
        {
            return Err(not_found_error("Photo", photo_id));
        }
        Ok(ApiResponse::message("Foto removida com sucesso"))
    }
}
