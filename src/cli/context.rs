//! Command execution context
//!
//! Resolves settings from flags, environment and config file, and hands out
//! API clients scoped to a single phase of work.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::models::{Credentials, Session};
use crate::client::{Configuration, ItemsClient};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::workflow;

/// Resolved settings for one command invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Config file that was consulted
    pub config_path: PathBuf,
    /// API host
    pub host: String,
    /// Username used to log in
    pub username: Option<String>,
    /// Bearer token supplied up front, if any
    pub token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build a context from global options and the config file.
    ///
    /// # Errors
    /// Returns error if an explicit config path is missing or the file is
    /// malformed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        Ok(Self::resolve(opts, config, Config::resolve_path(opts.config_ref())?))
    }

    /// Merge CLI/env options over file values
    fn resolve(opts: &GlobalOptions, config: Config, config_path: PathBuf) -> Self {
        let host = opts
            .host
            .clone()
            .unwrap_or_else(|| config.host_or_default().to_string());

        Self {
            config_path,
            host,
            username: opts.username.clone().or_else(|| config.username.clone()),
            token: opts.token.clone().filter(|t| !t.is_empty()),
            timeout: config.timeout(),
            format: opts.format,
        }
    }

    /// Credentials for the login call
    pub fn credentials(&self) -> Result<Credentials> {
        let username = self
            .username
            .as_deref()
            .ok_or(ConfigError::MissingUsername)?;
        Credentials::new(username)
    }

    /// Run the login phase on its own unauthenticated client.
    ///
    /// The client is released before this returns, whatever the outcome.
    pub async fn login(&self) -> Result<Session> {
        let credentials = self.credentials()?;
        let client =
            ItemsClient::with_timeout(&Configuration::unauthenticated(&self.host), self.timeout)?;
        workflow::acquire_session(&client, &credentials).await
    }

    /// Client authenticated with `token`
    pub fn client_for_token(&self, token: &str) -> Result<ItemsClient> {
        ItemsClient::with_timeout(
            &Configuration::authenticated(&self.host, token),
            self.timeout,
        )
    }

    /// Client for item commands.
    ///
    /// Uses the supplied token when there is one, otherwise logs in first.
    pub async fn items_client(&self) -> Result<ItemsClient> {
        let token = match &self.token {
            Some(token) => token.clone(),
            None => self.login().await?.token,
        };
        self.client_for_token(&token)
    }
}
