//! Output formatting for local state entries

use std::collections::BTreeMap;

use comfy_table::Cell;

use crate::admin::EntityState;
use crate::cli::OutputFormat;

use super::common::{new_table, print_json};

/// Output the state index (address, type, remote ID)
pub fn output_state_entries(
    entries: &BTreeMap<String, EntityState>,
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(entries),
        OutputFormat::Table => {
            if entries.is_empty() {
                println!("No entities in state");
                return Ok(());
            }

            let mut table = new_table(&["ADDRESS", "TYPE", "ID"], no_header);
            for (address, entry) in entries {
                table.add_row(vec![
                    Cell::new(address),
                    Cell::new(entry.resource_type),
                    Cell::new(&entry.id),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

/// Output one state entry with all its attributes
pub fn output_state_entry(
    address: &str,
    entry: &EntityState,
) -> Result<(), Box<dyn std::error::Error>> {
    print_json(&serde_json::json!({
        "address": address,
        "type": entry.resource_type,
        "id": entry.id,
        "attributes": entry.attributes,
    }))
}
