use std::sync::Arc;

use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::api_response::ApiResponse;
use crate::dto::quote_dto::{CreateQuoteRequest, QuoteListQuery, UpdateQuoteRequest};
use crate::models::quote::{Quote, QuoteChanges, QuoteStatus};
use crate::services::quote_calculator::retain_described_items;
use crate::state::{AppState, SharedStore};
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct QuoteController {
    store: SharedStore,
    config: Arc<EnvironmentConfig>,
}

impl QuoteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            config: state.config.clone(),
        }
    }

    /// Lista con búsqueda (`q`) y filtro de estado combinables
    pub async fn list(&self, query: QuoteListQuery) -> AppResult<Vec<Quote>> {
        let store = self.store.read().await;
        let quotes = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(term) => store.quotes.search(term),
            None => store.quotes.list(),
        };

        Ok(match query.status {
            Some(status) => quotes.into_iter().filter(|q| q.status == status).collect(),
            None => quotes,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Quote> {
        self.store
            .read()
            .await
            .quotes
            .get_by_id(id)
            .ok_or_else(|| not_found_error("Quote", id))
    }

    pub async fn create(&self, request: CreateQuoteRequest) -> AppResult<ApiResponse<Quote>> {
        request.validate()?;

        let mut new_quote = request.into_new_quote(&self.config);
        new_quote.items = retain_described_items(new_quote.items);
        if new_quote.items.is_empty() {
            return Err(validation_error(
                "items",
                "Adicione pelo menos um serviço com descrição",
            ));
        }

        let quote = self.store.write().await.quotes.create(new_quote);
        Ok(ApiResponse::success_with_message(quote, "Orçamento criado com sucesso"))
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateQuoteRequest,
    ) -> AppResult<ApiResponse<Quote>> {
        request.validate()?;
        if let Some(items) = &request.items {
            for item in items {
                item.validate()?;
            }
        }

        let mut changes = QuoteChanges::from(request);
        if let Some(items) = changes.items.take() {
            let items = retain_described_items(items);
            if items.is_empty() {
                return Err(validation_error(
                    "items",
                    "Adicione pelo menos um serviço com descrição",
                ));
            }
            changes.items = Some(items);
        }

        let quote = self
            .store
            .write()
            .await
            .quotes
            .update(id, changes)
            .ok_or_else(|| not_found_error("Quote", id))?;
        Ok(ApiResponse::success_with_message(quote, "Orçamento atualizado com sucesso"))
    }

    pub async fn set_status(&self, id: &str, status: QuoteStatus) -> AppResult<ApiResponse<Quote>> {
        let quote = self
            .store
            .write()
            .await
            .quotes
            .set_status(id, status)
            .ok_or_else(|| not_found_error("Quote", id))?;
        Ok(ApiResponse::success_with_message(quote, "Status do orçamento atualizado"))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<()>> {
        if !self.store.write().await.quotes.delete(id) {
            return Err(not_found_error("Quote", id));
        }
        Ok(ApiResponse::message("Orçamento excluído com sucesso"))
    }
}
