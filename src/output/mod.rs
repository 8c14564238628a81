//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print `data` as JSON, or as a table of `rows` built from it
pub fn print<T, R, F>(data: &T, format: OutputFormat, rows: F) -> Result<()>
where
    T: Serialize + ?Sized,
    R: Tabled,
    F: FnOnce(&T) -> Vec<R>,
{
    let output = match format {
        OutputFormat::Table => table::format_table(&rows(data)),
        OutputFormat::Json => json::format_json(data)?,
    };
    println!("{}", output);
    Ok(())
}
