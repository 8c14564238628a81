//! Run command: log in, create an item, read the count

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::{GlobalOptions, RunArgs};
use crate::cli::context::CommandContext;
use crate::cli::item::ItemDisplay;
use crate::error::Result;
use crate::output::{json, table};
use crate::workflow::{self, CreateOutcome};

/// Full run result as printed in JSON mode
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    token: &'a str,
    #[serde(flatten)]
    outcome: &'a CreateOutcome,
}

/// Run both phases. A failed login stops before any item call.
pub async fn run(opts: &GlobalOptions, args: &RunArgs) -> Result<()> {
    let new_item = args.to_new_item()?;
    let ctx = CommandContext::new(opts)?;

    let session = ctx.login().await?;
    if ctx.format == OutputFormat::Table {
        println!("{} Session token: {}", "✓".green(), session.token);
    }

    let outcome = {
        let client = ctx.client_for_token(&session.token)?;
        workflow::create_and_count(&client, &new_item).await?
    };

    match ctx.format {
        OutputFormat::Table => {
            println!("{} Created item:", "✓".green());
            println!("{}", table::format_table(&[ItemDisplay::from(&outcome.item)]));
            println!("Item count: {}", outcome.count.to_string().bold());
        }
        OutputFormat::Json => {
            let output = RunOutput {
                token: &session.token,
                outcome: &outcome,
            };
            println!("{}", json::format_json(&output)?);
        }
    }
    Ok(())
}
