//! Two-phase item workflow
//!
//! Phase one exchanges credentials for a bearer token. Phase two uses that
//! token to create an item and read back the item count. Each phase stops at
//! the first failure and hands the error to the caller.

use log::{info, warn};
use serde::Serialize;

use crate::client::models::{Credentials, Item, NewItem, Session};
use crate::client::{AuthApi, ItemsApi};
use crate::error::Result;

/// Result of the create-then-count phase
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutcome {
    /// The created record, including server-assigned fields
    pub item: Item,
    /// Item count read after the create
    pub count: u64,
}

/// Log in and return the session.
pub async fn acquire_session<A>(auth: &A, credentials: &Credentials) -> Result<Session>
where
    A: AuthApi + ?Sized,
{
    info!("Creating session for user '{}'", credentials.username);
    match auth.create_session(credentials).await {
        Ok(session) => Ok(session),
        Err(err) => {
            warn!("Login failed for user '{}': {}", credentials.username, err);
            Err(err)
        }
    }
}

/// Create `new_item`, then query the item count.
///
/// The count is not queried when the create fails.
pub async fn create_and_count<I>(items: &I, new_item: &NewItem) -> Result<CreateOutcome>
where
    I: ItemsApi + ?Sized,
{
    new_item.validate()?;

    let item = items.create_item(new_item).await.inspect_err(|err| {
        warn!("Creating item '{}' failed: {}", new_item.name, err);
    })?;
    info!("Created item {} ('{}')", item.id, item.name);

    let count = items.get_item_count().await.inspect_err(|err| {
        warn!("Counting items failed: {}", err);
    })?;

    Ok(CreateOutcome { item, count })
}
