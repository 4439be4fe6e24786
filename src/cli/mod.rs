//! CLI argument parsing

mod common;
mod get;
mod resource;
mod state;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use get::{ByIdArgs, GetResource, ListArgs, MembersArgs, WorkspacesArgs};
pub use resource::{CreateArgs, DeleteArgs, ImportArgs, RefreshArgs, UpdateArgs};
pub use state::{StateAction, StateAddressArgs, StateListArgs};

/// Anthropic organization administration CLI
#[derive(Parser, Debug)]
#[command(name = "anthropic-admin")]
#[command(version)]
#[command(
    about = "Manage Anthropic organization users, workspaces, workspace members and invites",
    long_about = None
)]
pub struct Cli {
    /// Admin API key (overrides ANTHROPIC_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API endpoint (overrides ANTHROPIC_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Local state file
    #[arg(
        long,
        global = true,
        env = defaults::STATE_FILE_ENV_VAR,
        default_value = defaults::STATE_FILE
    )]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read users, workspaces, members or invites
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create an entity and record it in state
    Create(CreateArgs),

    /// Change a recorded entity (replaces it if an immutable attribute changes)
    Update(UpdateArgs),

    /// Refresh recorded entities from the API, dropping vanished ones
    Refresh(RefreshArgs),

    /// Delete (or archive) a recorded entity
    Delete(DeleteArgs),

    /// Record an existing entity in state
    Import(ImportArgs),

    /// Inspect or edit local state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

impl Command {
    /// True if the command talks to the Admin API
    pub fn needs_api(&self) -> bool {
        !matches!(self, Command::State { .. })
    }
}
