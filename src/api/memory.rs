//! In-memory item store for tests
//!
//! Assigns ids like the database-backed store (max + 1), records every call,
//! and can be told to fail the next request of a given kind.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ApiResult, ItemStoreApi, Operation};
use crate::models::{HealthReport, Item, ItemId, NewItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create { name: String, description: Option<String> },
    Delete(ItemId),
    Health,
}

#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    calls: Vec<Call>,
    failures: HashMap<Operation, ApiError>,
    health: Option<String>,
}

#[derive(Default)]
pub struct MemoryItemStore {
    inner: Mutex<Inner>,
}

impl MemoryItemStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().items = items;
        store
    }

    pub fn set_health(&self, status: &str) {
        self.inner.lock().unwrap().health = Some(status.to_string());
    }

    /// Fail the next call of `operation` with HTTP `status`
    pub fn fail_next(&self, operation: Operation, status: u16) {
        self.fail_next_with(ApiError::Status { operation, status });
    }

    /// Fail the next call of the error's operation with `error`
    pub fn fail_next_with(&self, error: ApiError) {
        self.inner.lock().unwrap().failures.insert(error.operation(), error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.inner.lock().unwrap().items.clone()
    }

    fn record(&self, operation: Operation, call: Call) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        match inner.failures.remove(&operation) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ItemStoreApi for MemoryItemStore {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        self.record(Operation::ListItems, Call::List)?;
        Ok(self.items())
    }

    async fn create_item(&self, item: &NewItem) -> ApiResult<Item> {
        self.record(
            Operation::CreateItem,
            Call::Create {
                name: item.name().to_string(),
                description: item.description().map(str::to_string),
            },
        )?;

        let mut inner = self.inner.lock().unwrap();
        let id = inner.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let created = Item {
            id,
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
        };
        inner.items.push(created.clone());
        Ok(created)
    }

    async fn delete_item(&self, id: ItemId) -> ApiResult<()> {
        self.record(Operation::DeleteItem, Call::Delete(id))?;

        let mut inner = self.inner.lock().unwrap();
        let before = inner.items.len();
        inner.items.retain(|i| i.id != id);
        if inner.items.len() == before {
            return Err(ApiError::Status {
                operation: Operation::DeleteItem,
                status: 404,
            });
        }
        Ok(())
    }

    async fn check_health(&self) -> ApiResult<HealthReport> {
        self.record(Operation::CheckHealth, Call::Health)?;

        let status = self.inner.lock().unwrap().health.clone();
        status.map(|status| HealthReport { status }).ok_or(ApiError::Transport {
            operation: Operation::CheckHealth,
            message: "no health endpoint".to_string(),
        })
    }
}
