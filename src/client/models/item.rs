//! Item models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Payload for creating or replacing an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    /// Item name
    pub name: String,

    /// Item description
    pub description: String,

    /// Item price
    pub price: f64,
}

impl NewItem {
    /// Build an item payload, applying the same checks the server does.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Result<Self> {
        let item = Self {
            name: name.into(),
            description: description.into(),
            price,
        };
        item.validate()?;
        Ok(item)
    }

    /// Reject payloads the server would answer with a 400.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("item name must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::InvalidInput(
                "item description must not be empty".to_string(),
            ));
        }
        if !self.price.is_finite() {
            return Err(Error::InvalidInput("item price must be a number".to_string()));
        }
        Ok(())
    }
}

impl Default for NewItem {
    fn default() -> Self {
        Self {
            name: "New Item".to_string(),
            description: "Description of the new item".to_string(),
            price: 15.0,
        }
    }
}

/// Item record as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier
    pub id: u64,

    pub name: String,

    pub description: String,

    pub price: f64,

    /// Creation time (ISO 8601)
    pub created_at: DateTime<Utc>,
}

/// Response of the count endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub count: u64,
}

/// Error body returned by the API on 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}
