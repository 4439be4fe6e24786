//! Output formatting for users

use comfy_table::Cell;

use crate::admin::users::UserModel;
use crate::cli::OutputFormat;

use super::common::{new_table, print_json};

/// Output users in the requested format
pub fn output_users(
    users: &[UserModel],
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(users),
        OutputFormat::Table => {
            if users.is_empty() {
                println!("No users found");
                return Ok(());
            }

            let mut table = new_table(&["ID", "EMAIL", "NAME", "ROLE", "ADDED AT"], no_header);
            for user in users {
                table.add_row(vec![
                    Cell::new(&user.id),
                    Cell::new(&user.email),
                    Cell::new(&user.name),
                    Cell::new(&user.role),
                    Cell::new(&user.added_at),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

/// Output a single user
pub fn output_user(
    user: &UserModel,
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => print_json(user),
        OutputFormat::Table => output_users(std::slice::from_ref(user), format, no_header),
    }
}
