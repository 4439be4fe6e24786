//! Output formatting module
//!
//! Handles the table and JSON renderings of every entity kind.

mod common;
mod invites;
mod members;
mod state;
mod users;
mod workspaces;

pub use common::print_json;
pub use invites::output_invites;
pub use members::{output_member, output_members};
pub use state::{output_state_entries, output_state_entry};
pub use users::{output_user, output_users};
pub use workspaces::{output_workspace, output_workspaces};
