//! Users module - organization users (read-only)

mod api;
mod commands;
mod models;

pub use commands::{run_user_command, run_users_command};
pub use models::{User, UserModel, UsersDataSourceModel};
