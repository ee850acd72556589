use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, patch},
    Json, Router,
};

use crate::controllers::quote_request_controller::QuoteRequestController;
use crate::dto::api_response::ApiResponse;
use crate::dto::quote_request_dto::{
    CreateQuoteRequestForm, QuoteRequestListQuery, QuoteRequestStatusRequest,
    UpdateQuoteRequestForm,
};
use crate::middleware::auth::auth_middleware;
use crate::models::quote_request::QuoteRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// El alta es pública (formulario del sitio); el resto requiere sesión
pub fn create_quote_request_router(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, auth_middleware);

    Router::new()
        .route(
            "/",
            get(list_requests).route_layer(auth.clone()).post(submit_request),
        )
        .route(
            "/:id",
            get(get_request)
                .put(update_request)
                .delete(delete_request)
                .route_layer(auth.clone()),
        )
        .route("/:id/status", patch(update_request_status).route_layer(auth))
}

async fn submit_request(
    State(state): State<AppState>,
    Json(form): Json<CreateQuoteRequestForm>,
) -> Result<Json<ApiResponse<QuoteRequest>>, AppError> {
    let controller = QuoteRequestController::new(&state);
    Ok(Json(controller.submit(form).await?))
}

async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<QuoteRequestListQuery>,
) -> Result<Json<Vec<QuoteRequest>>, AppError> {
    let controller = QuoteRequestController::new(&state);
    Ok(Json(controller.list(query).await?))
}

async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRequest>, AppError> {
    let controller = QuoteRequestController::new(&state);
    Ok(Json(controller.get_by_id(&id).await?))
}

async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<UpdateQuoteRequestForm>,
) -> Result<Json<ApiResponse<QuoteRequest>>, AppError> {
    let controller = QuoteRequestController::new(&state);
    Ok(Json(controller.update(&id, form).await?))
}

async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<QuoteRequestStatusRequest>,
) -> Result<Json<ApiResponse<QuoteRequest>>, AppError> {
    let controller = QuoteRequestController::new(&state);
    Ok(Json(controller.set_status(&id, body).await?))
}

async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = QuoteRequestController::new(&state);
    Ok(Json(controller.delete(&id).await?))
}
