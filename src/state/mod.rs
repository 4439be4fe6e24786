//! Local state module
//!
//! Records the last known projection of every managed entity in a JSON
//! file, keyed by a user-chosen address, and drives the lifecycle commands
//! that keep it in step with the Admin API.

mod commands;
mod models;
mod store;

pub use commands::{
    parse_assignments, run_create_command, run_delete_command, run_import_command,
    run_refresh_command, run_state_command, run_update_command,
};
pub use models::{StateFile, STATE_VERSION};
pub use store::StateStore;
