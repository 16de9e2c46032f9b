//! Item Store API
//!
//! The capability set the view needs from the remote store, plus the HTTP
//! implementation used in the browser.

mod http;
#[cfg(test)]
pub mod memory;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{HealthReport, Item, ItemId, NewItem};

pub use http::HttpItemStore;

/// Which store operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListItems,
    CreateItem,
    DeleteItem,
    CheckHealth,
}

impl Operation {
    /// Operation-specific message shown to the user
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::ListItems => "Failed to load items",
            Operation::CreateItem => "Failed to add item",
            Operation::DeleteItem => "Failed to delete item",
            Operation::CheckHealth => "Failed to check backend health",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListItems => "list items",
            Operation::CreateItem => "create item",
            Operation::DeleteItem => "delete item",
            Operation::CheckHealth => "health check",
        };
        f.write_str(name)
    }
}

/// Generic message for requests that never got a response
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the item store. Make sure the backend is running.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{operation}: request failed: {message}")]
    Transport { operation: Operation, message: String },

    #[error("{operation}: server returned HTTP {status}")]
    Status { operation: Operation, status: u16 },

    #[error("{operation}: malformed response: {message}")]
    Decode { operation: Operation, message: String },
}

impl ApiError {
    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Status { operation, .. }
            | ApiError::Decode { operation, .. } => *operation,
        }
    }

    /// Text for the error banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { .. } => UNREACHABLE_MESSAGE.to_string(),
            ApiError::Status { operation, status } => {
                format!("{} (HTTP {})", operation.failure_message(), status)
            }
            ApiError::Decode { operation, .. } => operation.failure_message().to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote item store
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ItemStoreApi: Send + Sync {
    /// Full collection in server order
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// Insert and return the canonical item with its assigned id
    async fn create_item(&self, item: &NewItem) -> ApiResult<Item>;

    async fn delete_item(&self, id: ItemId) -> ApiResult<()>;

    async fn check_health(&self) -> ApiResult<HealthReport>;
}
