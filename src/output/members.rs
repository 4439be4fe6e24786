//! Output formatting for workspace members

use comfy_table::Cell;

use crate::admin::workspace_members::WorkspaceMemberModel;
use crate::cli::OutputFormat;

use super::common::{new_table, print_json};

/// Output workspace members in the requested format
pub fn output_members(
    members: &[WorkspaceMemberModel],
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(members),
        OutputFormat::Table => {
            if members.is_empty() {
                println!("No workspace members found");
                return Ok(());
            }

            let mut table = new_table(&["WORKSPACE ID", "USER ID", "ROLE"], no_header);
            for m in members {
                table.add_row(vec![
                    Cell::new(&m.workspace_id),
                    Cell::new(&m.user_id),
                    Cell::new(&m.workspace_role),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

/// Output a single workspace member
pub fn output_member(
    member: &WorkspaceMemberModel,
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(member),
        OutputFormat::Table => output_members(std::slice::from_ref(member), format, no_header),
    }
}
