use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse};
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListQuery, VehicleResponse,
};
use crate::models::service::NewService;
use crate::models::vehicle::{NewVehicle, VehicleChanges};
use crate::state::{AppState, SharedStore};
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleController {
    store: SharedStore,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub async fn list(&self, query: VehicleListQuery) -> AppResult<Vec<VehicleResponse>> {
        let store = self.store.read().await;
        let vehicles = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(term) => store.vehicles.search(term),
            None => store.vehicles.list(),
        };
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<VehicleResponse> {
        self.store
            .read()
            .await
            .vehicles
            .get_by_id(id)
            .map(VehicleResponse::from)
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let vehicle = self
            .store
            .write()
            .await
            .vehicles
            .create(NewVehicle::from(request));
        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Veículo cadastrado com sucesso",
        ))
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let vehicle = self
            .store
            .write()
            .await
            .vehicles
            .update(id, VehicleChanges::from(request))
            .ok_or_else(|| not_found_error("Vehicle", id))?;
        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Veículo atualizado com sucesso",
        ))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<()>> {
        if !self.store.write().await.vehicles.delete(id) {
            return Err(not_found_error("Vehicle", id));
        }
        Ok(ApiResponse::message("Veículo excluído com sucesso"))
    }

    /// Abre una orden de servicio para el vehículo
    pub async fn add_service(
        &self,
        vehicle_id: &str,
        request: CreateServiceRequest,
    ) -> AppResult<ApiResponse<ServiceResponse>> {
        request.validate()?;

        let service = self
            .store
            .write()
            .await
            .vehicles
            .add_service(vehicle_id, NewService::from(request))
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;
        Ok(ApiResponse::success_with_message(
            ServiceResponse::from(service),
            "Serviço cadastrado com sucesso",
        ))
    }
}
