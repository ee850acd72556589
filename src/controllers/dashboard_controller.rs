use crate::dto::service_dto::ServiceResponse;
use crate::models::analytics::DashboardSummary;
use crate::services::statistics::{dashboard_summary, RECENT_SERVICES_LIMIT};
use crate::state::{AppState, SharedStore};
use crate::utils::dates::BrDate;
use crate::utils::errors::AppResult;

pub struct DashboardController {
    store: SharedStore,
}

impl DashboardController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let store = self.store.read().await;
        Ok(dashboard_summary(
            store.vehicles.as_slice(),
            store.quotes.as_slice(),
            store.quote_requests.as_slice(),
            BrDate::today(),
        ))
    }

    pub async fn recent_services(&self, limit: Option<usize>) -> AppResult<Vec<ServiceResponse>> {
        let limit = limit.unwrap_or(RECENT_SERVICES_LIMIT);
        Ok(self
            .store
            .read()
            .await
            .vehicles
            .recent_services(limit)
            .into_iter()
            .map(ServiceResponse::from)
            .collect())
    }
}
