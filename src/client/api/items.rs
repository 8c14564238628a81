//! Items API trait

use async_trait::async_trait;

use crate::client::models::{Item, NewItem};
use crate::error::Result;

/// Item operations for the Items API.
///
/// Every operation is bearer-authenticated.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    /// Create a new item and return it with its server-assigned fields
    async fn create_item(&self, item: &NewItem) -> Result<Item>;

    /// Current number of items
    async fn get_item_count(&self) -> Result<u64>;

    /// Retrieve all items
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Retrieve a single item by ID
    async fn get_item(&self, id: u64) -> Result<Item>;

    /// Replace the fields of an existing item
    async fn update_item(&self, id: u64, item: &NewItem) -> Result<Item>;

    /// Delete an item by ID
    async fn delete_item(&self, id: u64) -> Result<()>;
}
