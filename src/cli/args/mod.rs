//! Shared CLI argument types

mod common;
mod global;
mod item;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use item::{ItemArgs, RunArgs};
