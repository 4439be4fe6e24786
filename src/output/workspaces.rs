//! Output formatting for workspaces

use comfy_table::Cell;

use crate::admin::workspaces::WorkspaceModel;
use crate::cli::OutputFormat;

use super::common::{new_table, or_dash, print_json};

/// Output workspaces in the requested format
pub fn output_workspaces(
    workspaces: &[WorkspaceModel],
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(workspaces),
        OutputFormat::Table => {
            if workspaces.is_empty() {
                println!("No workspaces found");
                return Ok(());
            }

            let mut table = new_table(
                &["ID", "NAME", "CREATED AT", "ARCHIVED AT", "COLOR"],
                no_header,
            );
            for ws in workspaces {
                table.add_row(vec![
                    Cell::new(or_dash(ws.id.as_deref())),
                    Cell::new(&ws.name),
                    Cell::new(or_dash(ws.created_at.as_deref())),
                    Cell::new(or_dash(ws.archived_at.as_deref())),
                    Cell::new(or_dash(ws.display_color.as_deref())),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

/// Output a single workspace
pub fn output_workspace(
    workspace: &WorkspaceModel,
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(workspace),
        OutputFormat::Table => {
            output_workspaces(std::slice::from_ref(workspace), format, no_header)
        }
    }
}
