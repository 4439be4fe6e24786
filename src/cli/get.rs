//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List all users in the organization
    Users(ListArgs),

    /// Get a user by ID
    User(ByIdArgs),

    /// List workspaces
    #[command(visible_alias = "ws")]
    Workspaces(WorkspacesArgs),

    /// Get a workspace by ID
    Workspace(ByIdArgs),

    /// List members of a workspace
    Members(MembersArgs),

    /// Get one workspace member by <WORKSPACE_ID>/<USER_ID>
    Member(ByIdArgs),

    /// List organization invites
    Invites(ListArgs),
}

/// Arguments for list subcommands without filters
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for single-entity lookups
#[derive(Parser, Debug)]
pub struct ByIdArgs {
    /// Entity ID
    pub id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get workspaces' subcommand
#[derive(Parser, Debug)]
pub struct WorkspacesArgs {
    /// Include archived workspaces
    #[arg(long, default_value_t = false)]
    pub include_archived: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get members' subcommand
#[derive(Parser, Debug)]
pub struct MembersArgs {
    /// Workspace ID
    #[arg(short = 'w', long = "workspace")]
    pub workspace_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
