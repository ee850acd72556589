use axum::{
    extract::{DefaultBodyLimit, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::service_controller::ServiceController;
use crate::dto::api_response::ApiResponse;
use crate::dto::service_dto::{
    AddPhotoRequest, ServiceListQuery, ServiceResponse, UpdateServiceRequest,
};
use crate::models::service::Photo;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Margen para el JSON que envuelve el data URI
const PHOTO_BODY_SLACK: usize = 64 * 1024;

/// Límite de cuerpo para una foto de `max_photo_bytes` codificada en base64
pub fn photo_body_limit(max_photo_bytes: usize) -> usize {
    max_photo_bytes.div_ceil(3) * 4 + PHOTO_BODY_SLACK
}

pub fn create_service_router(max_photo_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route(
            "/:order_ref",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route(
            "/:order_ref/photos",
            post(add_photo).layer(DefaultBodyLimit::max(photo_body_limit(max_photo_bytes))),
        )
        .route("/:order_ref/photos/:photo_id", delete(remove_photo))
}

async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(&state);
    Ok(Json(controller.list(query).await?))
}

async fn get_service(
    State(state): State<AppState>,
    Path(order_ref): Path<String>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(&state);
    Ok(Json(controller.get_by_order(&order_ref).await?))
}

async fn update_service(
    State(state): State<AppState>,
    Path(order_ref): Path<String>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<ApiResponse<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(&state);
    Ok(Json(controller.update(&order_ref, request).await?))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(order_ref): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServiceController::new(&state);
    Ok(Json(controller.delete(&order_ref).await?))
}

async fn add_photo(
    State(state): State<AppState>,
    Path(order_ref): Path<String>,
    Json(request): Json<AddPhotoRequest>,
) -> Result<Json<ApiResponse<Photo>>, AppError> {
    let controller = ServiceController::new(&state);
    Ok(Json(controller.add_photo(&order_ref, request).await?))
}

async fn remove_photo(
    State(state): State<AppState>,
    Path((order_ref, photo_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServiceController::new(&state);
    Ok(Json(controller.remove_photo(&order_ref, &photo_id).await?))
}
