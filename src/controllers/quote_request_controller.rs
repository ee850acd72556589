use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::quote_request_dto::{
    CreateQuoteRequestForm, QuoteRequestListQuery, QuoteRequestStatusRequest,
    UpdateQuoteRequestForm,
};
use crate::models::quote_request::{NewQuoteRequest, QuoteRequest, QuoteRequestChanges};
use crate::state::{AppState, SharedStore};
use crate::utils::errors::{not_found_error, AppResult};

pub struct QuoteRequestController {
    store: SharedStore,
}

impl QuoteRequestController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    pub async fn list(&self, query: QuoteRequestListQuery) -> AppResult<Vec<QuoteRequest>> {
        let store = self.store.read().await;
        let requests = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(term) => store.quote_requests.search(term),
            None => store.quote_requests.list(),
        };

        Ok(match query.status {
            Some(status) => requests.into_iter().filter(|r| r.status == status).collect(),
            None => requests,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<QuoteRequest> {
        self.store
            .read()
            .await
            .quote_requests
            .get_by_id(id)
            .ok_or_else(|| not_found_error("QuoteRequest", id))
    }

    /// Alta desde el formulario público
    pub async fn submit(
        &self,
        form: CreateQuoteRequestForm,
    ) -> AppResult<ApiResponse<QuoteRequest>> {
        form.validate()?;

        let request = self
            .store
            .write()
            .await
            .quote_requests
            .create(NewQuoteRequest::from(form));
        Ok(ApiResponse::success_with_message(
            request,
            "Solicitação enviada com sucesso! Entraremos em contato em breve.",
        ))
    }

    pub async fn update(
        &self,
        id: &str,
        form: UpdateQuoteRequestForm,
    ) -> AppResult<ApiResponse<QuoteRequest>> {
        form.validate()?;

        let request = self
            .store
            .write()
            .await
            .quote_requests
            .update(id, QuoteRequestChanges::from(form))
            .ok_or_else(|| not_found_error("QuoteRequest", id))?;
        Ok(ApiResponse::success_with_message(request, "Solicitação atualizada com sucesso"))
    }

    pub async fn set_status(
        &self,
        id: &str,
        body: QuoteRequestStatusRequest,
    ) -> AppResult<ApiResponse<QuoteRequest>> {
        let changes = QuoteRequestChanges {
            status: Some(body.status),
            internal_notes: body.internal_notes,
            ..Default::default()
        };

        let request = self
            .store
            .write()
            .await
            .quote_requests
            .update(id, changes)
            .ok_or_else(|| not_found_error("QuoteRequest", id))?;
        Ok(ApiResponse::success_with_message(request, "Status da solicitação atualizado"))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<()>> {
        if !self.store.write().await.quote_requests.delete(id) {
            return Err(not_found_error("QuoteRequest", id));
        }
        Ok(ApiResponse::message("Solicitação excluída com sucesso"))
    }
}
