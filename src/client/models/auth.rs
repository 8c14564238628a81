//! Authentication models

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Login credentials.
///
/// Only a username is modeled; the login endpoint takes no password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// The username of the user
    pub username: String,
}

impl Credentials {
    /// Build credentials, rejecting an empty or blank username.
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(Error::InvalidInput("username must not be empty".to_string()));
        }
        Ok(Self { username })
    }
}

/// Session returned by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token
    pub token: String,
}

impl Session {
    /// Expiry of the token if it is a JWT carrying an `exp` claim.
    ///
    /// Display only; the token is treated as opaque everywhere else.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        #[derive(Deserialize)]
        struct JwtPayload {
            exp: i64,
        }

        let mut parts = self.token.split('.');
        let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let claims: JwtPayload = serde_json::from_slice(&bytes).ok()?;
        DateTime::from_timestamp(claims.exp, 0)
    }
}
