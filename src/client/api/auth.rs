//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Credentials, Session};
use crate::error::Result;

/// Authentication operations for the Items API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in and obtain a bearer token
    async fn create_session(&self, credentials: &Credentials) -> Result<Session>;
}
