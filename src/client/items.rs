//! Items API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{Credentials, ErrorResponse, Item, ItemCount, NewItem, Session};
use super::{AuthApi, Configuration, ItemsApi};
use crate::error::{ApiError, ConfigError, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Items API.
///
/// Each instance is scoped to one [`Configuration`]. The underlying connection
/// pool is released when the client is dropped.
pub struct ItemsClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl ItemsClient {
    /// Create a client with the default timeout
    pub fn new(config: &Configuration) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(config: &Configuration, timeout: Duration) -> Result<Self> {
        let host = config.host().trim_end_matches('/');
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "host must start with http:// or https://, got '{}'",
                host
            ))
            .into());
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Acquired API client: {:?}", config);

        Ok(Self {
            http,
            base_url: host.to_string(),
            token: config.token().map(str::to_string),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request carrying the bearer token.
    ///
    /// Fails without touching the network when no token is configured.
    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthorized)?;
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    /// Send a request and turn non-success statuses into API errors
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("{} {}", status, response.url());

        if status.is_success() {
            Ok(response)
        } else {
            Err(error_for_status(status, response).await.into())
        }
    }
}

/// Decode a successful response body
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
}

/// Map an error status to an [`ApiError`], preferring the server's message
async fn error_for_status(status: StatusCode, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => {
            debug!("API error body: code {}", err.code);
            err.message
        }
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body,
    };

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        status if status.is_server_error() => ApiError::ServerError(message),
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

impl Drop for ItemsClient {
    fn drop(&mut self) {
        debug!("Released API client for {}", self.base_url);
    }
}

#[async_trait]
impl AuthApi for ItemsClient {
    async fn create_session(&self, credentials: &Credentials) -> Result<Session> {
        let request = self.http.post(self.url("/api/sessions")).json(credentials);
        let response = self.execute(request).await?;
        let session: Session = parse_json(response).await?;

        if session.token.is_empty() {
            return Err(ApiError::InvalidResponse(
                "Login response contained an empty token".to_string(),
            )
            .into());
        }
        Ok(session)
    }
}

#[async_trait]
impl ItemsApi for ItemsClient {
    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let request = self.authorized(Method::POST, "/api/items")?.json(item);
        parse_json(self.execute(request).await?).await
    }

    async fn get_item_count(&self) -> Result<u64> {
        let request = self.authorized(Method::GET, "/api/items/count")?;
        let count: ItemCount = parse_json(self.execute(request).await?).await?;
        Ok(count.count)
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let request = self.authorized(Method::GET, "/api/items")?;
        parse_json(self.execute(request).await?).await
    }

    async fn get_item(&self, id: u64) -> Result<Item> {
        let path = format!("/api/items/{}", id);
        let request = self.authorized(Method::GET, &path)?;
        parse_json(self.execute(request).await?).await
    }

    async fn update_item(&self, id: u64, item: &NewItem) -> Result<Item> {
        let path = format!("/api/items/{}", id);
        let request = self.authorized(Method::PUT, &path)?.json(item);
        parse_json(self.execute(request).await?).await
    }

    async fn delete_item(&self, id: u64) -> Result<()> {
        let path = format!("/api/items/{}", id);
        let request = self.authorized(Method::DELETE, &path)?;
        self.execute(request).await?;
        Ok(())
    }
}
