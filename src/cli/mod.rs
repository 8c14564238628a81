//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod item;
pub mod login;
pub mod run;
pub mod status;

pub use args::{GlobalOptions, ItemArgs, OutputFormat, RunArgs};

/// itemctl - command-line client for the Items API
#[derive(Parser, Debug)]
#[command(name = "itemctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ITEMCTL_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// API host [default: http://localhost:3000]
    #[arg(long, global = true, env = "ITEMCTL_HOST", hide_env = true)]
    pub host: Option<String>,

    /// Username to log in with
    #[arg(long, global = true, env = "ITEMCTL_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Bearer token for item commands (skips login)
    #[arg(
        long,
        global = true,
        env = "ITEMCTL_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "ITEMCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ITEMCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and print the session token
    Login,

    /// Log in, create an item, then print the item count
    Run(RunArgs),

    /// Manage items
    #[command(subcommand)]
    Item(ItemCommands),

    /// Show the resolved configuration
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   itemctl completion bash > /etc/bash_completion.d/itemctl
  zsh:    itemctl completion zsh > \"${fpath[1]}/_itemctl\"
  fish:   itemctl completion fish > ~/.config/fish/completions/itemctl.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Item subcommands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Create a new item
    Create(ItemArgs),

    /// List all items
    List,

    /// Show a single item
    Get {
        /// Item ID
        id: u64,
    },

    /// Replace the fields of an item
    Update {
        /// Item ID
        id: u64,

        #[command(flatten)]
        item: ItemArgs,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: u64,
    },

    /// Print the number of items
    Count,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["itemctl", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.name, "New Item");
                assert_eq!(args.description, "Description of the new item");
                assert_eq!(args.price, 15.0);
            }
            other => panic!("Expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_item_update_parses() {
        let cli = Cli::try_parse_from([
            "itemctl",
            "item",
            "update",
            "2",
            "--name",
            "Renamed",
            "--description",
            "Changed",
            "--price",
            "3.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Item(ItemCommands::Update { id, item }) => {
                assert_eq!(id, 2);
                assert_eq!(item.name, "Renamed");
                assert_eq!(item.price, 3.5);
            }
            other => panic!("Expected item update, got {:?}", other),
        }
    }

    #[test]
    fn test_item_create_requires_fields() {
        let result = Cli::try_parse_from(["itemctl", "item", "create", "--name", "x"]);
        assert!(result.is_err());
    }
}
