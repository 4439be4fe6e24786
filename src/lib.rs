//! anthropic-admin - Manage Anthropic organizations over the Admin API
//!
//! Declarative lifecycle for workspaces, workspace members and
//! organization invites, plus read access to users.
//!
//! # Features
//!
//! - Read users, workspaces, workspace members and invites
//! - Create, update, delete and import managed entities
//! - Plan-driven updates: in-place change or replace (delete then create)
//! - Local state file keyed by user-chosen addresses
//! - Automatic cursor pagination and transient error retries
//!
//! # Example
//!
//! ```bash
//! # List workspaces, archived ones included
//! anthropic-admin get ws --include-archived
//!
//! # Create a workspace and record it as "prod"
//! anthropic-admin create workspace prod --set name=Production
//!
//! # Add a member to it
//! anthropic-admin create workspace_member alice \
//!     --set workspace_id=wrkspc_01 --set user_id=user_01 \
//!     --set workspace_role=workspace_developer
//!
//! # Adopt an existing membership
//! anthropic-admin import workspace_member bob wrkspc_01/user_02
//!
//! # Show what is recorded
//! anthropic-admin state list
//! ```

pub mod admin;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod state;
pub mod ui;

pub use admin::{
    AdminClient, CredentialsResolver, EntityState, ManagedResource, PlanAction, Reconciler,
    ResourceType, RetryPolicy,
};
pub use cli::{Cli, Command, GetResource, OutputFormat, StateAction};
pub use error::{AdminError, Result};
pub use state::{StateFile, StateStore};
