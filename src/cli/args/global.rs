//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For host and username the precedence is: CLI flag > environment variable >
/// config file > default. This struct captures the CLI/env layer; config file
/// values are resolved later in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// API host override
    pub host: Option<String>,

    /// Username used to log in
    pub username: Option<String>,

    /// Bearer token; skips the login call for item commands
    pub token: Option<String>,

    /// Custom config file path (defaults to ~/.itemctl/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            host: cli.host.clone(),
            username: cli.username.clone(),
            token: cli.token.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
