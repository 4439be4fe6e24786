//! Output formatting for organization invites

use comfy_table::Cell;

use crate::admin::invites::OrganizationInviteModel;
use crate::cli::OutputFormat;

use super::common::{new_table, or_dash, print_json};

/// Output invites in the requested format
pub fn output_invites(
    invites: &[OrganizationInviteModel],
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(invites),
        OutputFormat::Table => {
            if invites.is_empty() {
                println!("No invites found");
                return Ok(());
            }

            let mut table = new_table(
                &["ID", "EMAIL", "ROLE", "STATUS", "CREATED AT", "EXPIRES AT"],
                no_header,
            );
            for invite in invites {
                table.add_row(vec![
                    Cell::new(or_dash(invite.id.as_deref())),
                    Cell::new(&invite.email),
                    Cell::new(&invite.role),
                    Cell::new(or_dash(invite.status.as_deref())),
                    Cell::new(or_dash(invite.created_at.as_deref())),
                    Cell::new(or_dash(invite.expires_at.as_deref())),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
