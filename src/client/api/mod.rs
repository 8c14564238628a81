//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Session acquisition
//! - [`ItemsApi`] - Item operations (require a bearer token)

mod auth;
mod items;

pub use auth::AuthApi;
pub use items::ItemsApi;
