//! Items API client

use std::fmt;

pub mod api;
pub mod items;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, ItemsApi};
pub use items::ItemsClient;
#[cfg(test)]
pub use mock::MockItemsClient;

/// Default API host
pub const DEFAULT_HOST: &str = "http://localhost:3000";

/// Client configuration for one phase of work.
///
/// A configuration either talks to the login endpoint without credentials or
/// carries a bearer token for the item endpoints. It is never mutated: moving
/// from one mode to the other means building a new value.
#[derive(Clone, PartialEq, Eq)]
pub enum Configuration {
    /// Host only; used to obtain a session
    Unauthenticated { host: String },

    /// Host plus bearer token; used for item operations
    Authenticated { host: String, token: String },
}

impl Configuration {
    /// Configuration for the login phase
    pub fn unauthenticated(host: impl Into<String>) -> Self {
        Configuration::Unauthenticated { host: host.into() }
    }

    /// Configuration carrying a bearer token
    pub fn authenticated(host: impl Into<String>, token: impl Into<String>) -> Self {
        Configuration::Authenticated {
            host: host.into(),
            token: token.into(),
        }
    }

    /// API host (scheme, host and optional port)
    pub fn host(&self) -> &str {
        match self {
            Configuration::Unauthenticated { host } | Configuration::Authenticated { host, .. } => {
                host
            }
        }
    }

    /// Bearer token, if this configuration carries one
    pub fn token(&self) -> Option<&str> {
        match self {
            Configuration::Unauthenticated { .. } => None,
            Configuration::Authenticated { token, .. } => Some(token),
        }
    }
}

// Tokens stay out of debug logs.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Unauthenticated { host } => f
                .debug_struct("Unauthenticated")
                .field("host", host)
                .finish(),
            Configuration::Authenticated { host, .. } => f
                .debug_struct("Authenticated")
                .field("host", host)
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
