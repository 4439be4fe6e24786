//! Common utilities for output formatters

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;

/// Create a table with the shared style and optional header row
pub fn new_table(headers: &[&str], no_header: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    if !no_header {
        table.set_header(headers.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display placeholder for absent optional values
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
