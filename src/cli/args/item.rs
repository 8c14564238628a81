//! Item payload arguments

use clap::Args;

use crate::client::models::NewItem;
use crate::error::Result;

/// Fields of an item to create or replace
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Item description
    #[arg(long)]
    pub description: String,

    /// Item price
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
}

impl ItemArgs {
    /// Validated request payload
    pub fn to_new_item(&self) -> Result<NewItem> {
        NewItem::new(self.name.clone(), self.description.clone(), self.price)
    }
}

/// Item created by `run`; every field has a default
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Item name
    #[arg(long, default_value = "New Item")]
    pub name: String,

    /// Item description
    #[arg(long, default_value = "Description of the new item")]
    pub description: String,

    /// Item price
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    pub price: f64,
}

impl RunArgs {
    /// Validated request payload
    pub fn to_new_item(&self) -> Result<NewItem> {
        NewItem::new(self.name.clone(), self.description.clone(), self.price)
    }
}
