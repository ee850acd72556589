use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::service_dto::ServiceResponse;
use crate::models::analytics::DashboardSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_summary))
        .route("/recent-services", get(get_recent_services))
}

async fn get_summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(&state);
    Ok(Json(controller.summary().await?))
}

async fn get_recent_services(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = DashboardController::new(&state);
    Ok(Json(controller.recent_services(query.limit).await?))
}
