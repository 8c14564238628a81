//! Item command implementations

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::{GlobalOptions, ItemArgs};
use crate::cli::context::CommandContext;
use crate::cli::OutputFormat;
use crate::client::ItemsApi;
use crate::client::models::{Item, ItemCount};
use crate::error::Result;
use crate::output::{self, json};

/// Item for table display
#[derive(Tabled)]
pub struct ItemDisplay {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "PRICE")]
    price: String,
    #[tabled(rename = "CREATED")]
    created_at: String,
}

impl From<&Item> for ItemDisplay {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: format!("{:.2}", item.price),
            created_at: item.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn single(item: &Item) -> Vec<ItemDisplay> {
    vec![ItemDisplay::from(item)]
}

/// Run the item create command
pub async fn create(opts: &GlobalOptions, args: &ItemArgs) -> Result<()> {
    let new_item = args.to_new_item()?;
    let ctx = CommandContext::new(opts)?;
    let client = ctx.items_client().await?;

    let item = client.create_item(&new_item).await?;
    output::print(&item, ctx.format, single)
}

/// Run the item list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.items_client().await?;

    let items = client.list_items().await?;
    output::print(&items, ctx.format, |items: &Vec<Item>| {
        items.iter().map(ItemDisplay::from).collect()
    })
}

/// Run the item get command
pub async fn get(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.items_client().await?;

    let item = client.get_item(id).await?;
    output::print(&item, ctx.format, single)
}

/// Run the item update command
pub async fn update(opts: &GlobalOptions, id: u64, args: &ItemArgs) -> Result<()> {
    let new_item = args.to_new_item()?;
    let ctx = CommandContext::new(opts)?;
    let client = ctx.items_client().await?;

    let item = client.update_item(id, &new_item).await?;
    output::print(&item, ctx.format, single)
}

/// Deletion result as printed in JSON mode
#[derive(Debug, Serialize)]
struct Deleted {
    id: u64,
    deleted: bool,
}

/// Run the item delete command
pub async fn delete(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.items_client().await?;

    client.delete_item(id).await?;

    match ctx.format {
        OutputFormat::Table => println!("{} Deleted item {}", "✓".green(), id),
        OutputFormat::Json => println!("{}", json::format_json(&Deleted { id, deleted: true })?),
    }
    Ok(())
}

/// Run the item count command
pub async fn count(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.items_client().await?;

    let count = client.get_item_count().await?;

    match ctx.format {
        OutputFormat::Table => println!("{}", count),
        OutputFormat::Json => println!("{}", json::format_json(&ItemCount { count })?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_item_display_formats_fields() {
        let item = Item {
            id: 1,
            name: "Sample Item 1".to_string(),
            description: "This is a sample item 1.".to_string(),
            price: 9.99,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        };

        let display = ItemDisplay::from(&item);
        assert_eq!(display.id, 1);
        assert_eq!(display.price, "9.99");
        assert_eq!(display.created_at, "2023-01-01 00:00:00");
    }
}
