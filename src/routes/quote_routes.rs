use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::api_response::ApiResponse;
use crate::dto::quote_dto::{
    CreateQuoteRequest, QuoteListQuery, QuoteStatusRequest, UpdateQuoteRequest,
};
use crate::models::quote::Quote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quotes).post(create_quote))
        .route("/:id", get(get_quote).put(update_quote).delete(delete_quote))
        .route("/:id/status", patch(update_quote_status))
}

async fn list_quotes(
    State(state): State<AppState>,
    Query(query): Query<QuoteListQuery>,
) -> Result<Json<Vec<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.list(query).await?))
}

async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Quote>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.get_by_id(&id).await?))
}

async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.create(request).await?))
}

async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuoteRequest>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.update(&id, request).await?))
}

async fn update_quote_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<QuoteStatusRequest>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.set_status(&id, request.status).await?))
}

async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.delete(&id).await?))
}
