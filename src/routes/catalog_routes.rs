use axum::{routing::get, Json, Router};

use crate::dto::catalog_dto::StatusCatalog;
use crate::state::AppState;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new().route("/statuses", get(get_statuses))
}

async fn get_statuses() -> Json<StatusCatalog> {
    Json(StatusCatalog::build())
}
