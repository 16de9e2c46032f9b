//! Frontend Models
//!
//! Data structures matching the item store's JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned item identifier
pub type ItemId = u64;

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Description to render under the name, if there is one to show
    pub fn description_line(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Create payload sent to the store
///
/// Only built through [`NewItem::from_input`], so the name is always trimmed
/// and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem {
    name: String,
    description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name is required")]
    NameRequired,
}

impl NewItem {
    /// Validate raw form input
    ///
    /// Both fields are trimmed; an empty description becomes `None`.
    pub fn from_input(name: &str, description: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let description = description.trim();
        Ok(Self {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Body of the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
}

/// Backend health as shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Checking,
    Reported(String),
    Unhealthy,
}

impl HealthStatus {
    pub fn label(&self) -> &str {
        match self {
            HealthStatus::Unknown | HealthStatus::Checking => "checking...",
            HealthStatus::Reported(status) => status.as_str(),
            HealthStatus::Unhealthy => "unhealthy",
        }
    }

    /// CSS modifier for the status dot
    pub fn css_class(&self) -> &'static str {
        match self {
            HealthStatus::Unknown | HealthStatus::Checking => "status-indicator",
            HealthStatus::Reported(status) if status == "healthy" => "status-indicator healthy",
            HealthStatus::Reported(_) => "status-indicator degraded",
            HealthStatus::Unhealthy => "status-indicator unhealthy",
        }
    }
}
