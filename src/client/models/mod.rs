//! Items API data models
//!
//! Request and response types exchanged with the Items API, organized by
//! resource type.

mod auth;
mod item;

pub use auth::{Credentials, Session};
pub use item::{ErrorResponse, Item, ItemCount, NewItem};
