//! Login command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::models::Session;
use crate::error::Result;
use crate::output::json;

/// Login result as printed in JSON mode
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput<'a> {
    pub username: &'a str,
    pub token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Run the login command and print the token
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.login().await?;
    let username = ctx.username.as_deref().unwrap_or_default();

    print_session(username, &session, ctx.format)
}

/// Print a session in the requested format
pub fn print_session(username: &str, session: &Session, format: OutputFormat) -> Result<()> {
    let expires_at = session.expires_at().map(|t| t.to_rfc3339());

    match format {
        OutputFormat::Table => {
            println!("{} Logged in as {}", "✓".green(), username.bold());
            println!("Token: {}", session.token);
            if let Some(expires) = expires_at {
                println!("Expires: {}", expires.dimmed());
            }
        }
        OutputFormat::Json => {
            let output = LoginOutput {
                username,
                token: &session.token,
                expires_at,
            };
            println!("{}", json::format_json(&output)?);
        }
    }
    Ok(())
}
