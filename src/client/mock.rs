//! Mock Items API client for testing
//!
//! Keeps items in memory and enforces the bearer token, so workflows can be
//! exercised without a server.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ItemsApi};
use super::models::{Credentials, Item, NewItem, Session};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockItemsClient::new().with_token("tok").await;
/// let session = mock.create_session(&Credentials::new("admin")?).await?;
/// let authed = mock.authorized(&session.token);
/// ```
#[derive(Clone)]
pub struct MockItemsClient {
    /// Shared item store
    items: Arc<Mutex<Vec<Item>>>,
    /// Token handed out by create_session
    issued_token: Arc<Mutex<String>>,
    /// Token this handle presents on item calls
    presented_token: Option<String>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockItemsClient {
    fn default() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            issued_token: Arc::new(Mutex::new("mock-token".to_string())),
            presented_token: None,
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub create_session: usize,
    pub create_item: usize,
    pub get_item_count: usize,
    pub list_items: usize,
    pub get_item: usize,
    pub update_item: usize,
    pub delete_item: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.create_session
            + self.create_item
            + self.get_item_count
            + self.list_items
            + self.get_item
            + self.update_item
            + self.delete_item
    }
}

impl MockItemsClient {
    /// Create a new mock client with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned from create_session.
    pub async fn with_token(self, token: &str) -> Self {
        *self.issued_token.lock().await = token.to_string();
        self
    }

    /// Seed the item store.
    pub async fn with_items(self, items: Vec<Item>) -> Self {
        *self.items.lock().await = items;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// A handle sharing this store that presents `token` on item calls.
    pub fn authorized(&self, token: &str) -> Self {
        Self {
            presented_token: Some(token.to_string()),
            ..self.clone()
        }
    }

    /// Get the current call counts.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }
        Ok(())
    }

    async fn check_token(&self) -> Result<()> {
        let issued = self.issued_token.lock().await;
        match self.presented_token.as_deref() {
            Some(token) if token == issued.as_str() => Ok(()),
            _ => Err(ApiError::Unauthorized.into()),
        }
    }

    async fn guard(&self) -> Result<()> {
        self.check_error().await?;
        self.check_token().await
    }

    fn not_found(id: u64) -> ApiError {
        ApiError::NotFound(format!("Item not found: {}", id))
    }
}

#[async_trait]
impl AuthApi for MockItemsClient {
    async fn create_session(&self, _credentials: &Credentials) -> Result<Session> {
        self.call_count.lock().await.create_session += 1;
        self.check_error().await?;
        Ok(Session {
            token: self.issued_token.lock().await.clone(),
        })
    }
}

#[async_trait]
impl ItemsApi for MockItemsClient {
    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        self.call_count.lock().await.create_item += 1;
        self.guard().await?;

        let mut items = self.items.lock().await;
        let created = Item {
            id: items.len() as u64 + 1,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            created_at: Utc::now(),
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn get_item_count(&self) -> Result<u64> {
        self.call_count.lock().await.get_item_count += 1;
        self.guard().await?;
        Ok(self.items.lock().await.len() as u64)
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.call_count.lock().await.list_items += 1;
        self.guard().await?;
        Ok(self.items.lock().await.clone())
    }

    async fn get_item(&self, id: u64) -> Result<Item> {
        self.call_count.lock().await.get_item += 1;
        self.guard().await?;
        self.items
            .lock()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id).into())
    }

    async fn update_item(&self, id: u64, item: &NewItem) -> Result<Item> {
        self.call_count.lock().await.update_item += 1;
        self.guard().await?;

        let mut items = self.items.lock().await;
        let existing = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        existing.name = item.name.clone();
        existing.description = item.description.clone();
        existing.price = item.price;
        Ok(existing.clone())
    }

    async fn delete_item(&self, id: u64) -> Result<()> {
        self.call_count.lock().await.delete_item += 1;
        self.guard().await?;

        let mut items = self.items.lock().await;
        let index = items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        items.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seeded_item(id: u64) -> Item {
        Item {
            id,
            name: format!("Sample Item {}", id),
            description: format!("This is a sample item {}.", id),
            price: 9.99,
            created_at: Utc.with_ymd_and_hms(2023, 1, id as u32, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_seeded_items_are_listed() {
        let mock = MockItemsClient::new()
            .with_items(vec![seeded_item(1), seeded_item(2)])
            .await;
        let items = mock.authorized("mock-token");

        assert_eq!(items.get_item_count().await.unwrap(), 2);
        assert_eq!(items.list_items().await.unwrap().len(), 2);
        assert_eq!(items.get_item(2).await.unwrap().name, "Sample Item 2");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mock = MockItemsClient::new().with_items(vec![seeded_item(1)]).await;
        let items = mock.authorized("mock-token");

        let updated = items
            .update_item(1, &NewItem::new("Renamed", "Changed", 1.5).unwrap())
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.created_at, seeded_item(1).created_at);

        items.delete_item(1).await.unwrap();
        assert!(matches!(
            items.get_item(1).await,
            Err(crate::error::Error::Api(ApiError::NotFound(_)))
        ));
        assert_eq!(mock.call_counts().await.total(), 3);
    }

    #[tokio::test]
    async fn test_unauthorized_handle_is_rejected() {
        let mock = MockItemsClient::new();
        assert!(mock.list_items().await.is_err());
    }
}
