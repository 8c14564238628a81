//! itemctl - command-line client for the Items API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod workflow;

use cli::{Cli, Commands, GlobalOptions, ItemCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        log::debug!("Command failed: {:?}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "warn,itemctl=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login => cli::login::run(&opts).await,
        Commands::Run(args) => cli::run::run(&opts, &args).await,
        Commands::Item(item_cmd) => match item_cmd {
            ItemCommands::Create(args) => cli::item::create(&opts, &args).await,
            ItemCommands::List => cli::item::list(&opts).await,
            ItemCommands::Get { id } => cli::item::get(&opts, id).await,
            ItemCommands::Update { id, item } => cli::item::update(&opts, id, &item).await,
            ItemCommands::Delete { id } => cli::item::delete(&opts, id).await,
            ItemCommands::Count => cli::item::count(&opts).await,
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
