//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::json;

/// Resolved settings as printed in JSON mode
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusOutput<'a> {
    config_file: String,
    config_file_exists: bool,
    host: &'a str,
    username: Option<&'a str>,
    token_provided: bool,
    timeout_secs: u64,
}

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let exists = ctx.config_path.exists();

    if ctx.format == OutputFormat::Json {
        let output = StatusOutput {
            config_file: ctx.config_path.display().to_string(),
            config_file_exists: exists,
            host: &ctx.host,
            username: ctx.username.as_deref(),
            token_provided: ctx.token.is_some(),
            timeout_secs: ctx.timeout.as_secs(),
        };
        println!("{}", json::format_json(&output)?);
        return Ok(());
    }

    println!("{}\n", "itemctl Configuration Status".bold());

    let file_note = if exists { "" } else { " (not found, using defaults)" };
    println!(
        "Config file: {}{}",
        ctx.config_path.display().to_string().cyan(),
        file_note.dimmed()
    );
    println!("API host: {}", ctx.host.cyan());

    match ctx.username.as_deref() {
        Some(username) => println!("{} Username: {}", "✓".green(), username),
        None => {
            println!("{} Username not configured", "✗".red());
            println!("  → Pass --username or set ITEMCTL_USERNAME");
        }
    }

    if ctx.token.is_some() {
        println!("{} Bearer token provided (login will be skipped)", "✓".green());
    } else {
        println!("{} No bearer token (will log in on demand)", "○".dimmed());
    }

    println!("Request timeout: {}s", ctx.timeout.as_secs());
    Ok(())
}
