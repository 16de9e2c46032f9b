//! HTTP Item Store
//!
//! JSON-over-HTTP client for the item store, built on `reqwest` (which uses
//! `fetch` on wasm32).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ItemStoreApi, Operation};
use crate::config::{ApiConfig, ConfigError};
use crate::models::{HealthReport, Item, ItemId, NewItem};

#[derive(Debug, Clone)]
pub struct HttpItemStore {
    client: Client,
    base_url: String,
}

impl HttpItemStore {
    /// `base_url` must be absolute; a trailing slash is ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig, origin: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self::new(config.resolve(origin)?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}", self.base_url, id)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

/// Send and reject non-2xx statuses
async fn send(operation: Operation, request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await.map_err(|e| ApiError::Transport {
        operation,
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            operation,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(operation: Operation, response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        operation,
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl ItemStoreApi for HttpItemStore {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let op = Operation::ListItems;
        let response = send(op, self.client.get(self.items_url())).await?;
        decode(op, response).await
    }

    async fn create_item(&self, item: &NewItem) -> ApiResult<Item> {
        let op = Operation::CreateItem;
        let response = send(op, self.client.post(self.items_url()).json(item)).await?;
        decode(op, response).await
    }

    async fn delete_item(&self, id: ItemId) -> ApiResult<()> {
        // Body varies by backend (empty 204 or a message object), so it is ignored
        send(Operation::DeleteItem, self.client.delete(self.item_url(id))).await?;
        Ok(())
    }

    async fn check_health(&self) -> ApiResult<HealthReport> {
        let op = Operation::CheckHealth;
        let response = send(op, self.client.get(self.health_url())).await?;
        decode(op, response).await
    }
}
