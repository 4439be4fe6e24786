//! Anthropic Admin API module
//!
//! This module provides the API client, the cursor paginator and the
//! lifecycle reconciler for organization users, workspaces, workspace
//! members and invites.

mod client;
mod credentials;
pub mod data_sources;
pub mod ids;
pub mod invites;
pub mod lifecycle;
pub mod pagination;
mod reconciler;
pub mod schema;
pub mod traits;
pub mod users;
pub mod workspace_members;
pub mod workspaces;

pub use client::{AdminClient, RetryPolicy};
pub use credentials::CredentialsResolver;
pub use ids::{build_two_part_id, split_two_part_id};
pub use invites::{Invite, OrganizationInviteModel, OrganizationInviteResource};
pub use lifecycle::{EntityState, ResourceType};
pub use pagination::{collect_pages, ListPage};
pub use reconciler::Reconciler;
pub use schema::{FieldDescriptor, FieldMode, PlanAction, ResourceSchema};
pub use traits::{ManagedResource, Populate};
pub use users::{User, UserModel};
pub use workspace_members::{WorkspaceMember, WorkspaceMemberModel, WorkspaceMemberResource};
pub use workspaces::{Workspace, WorkspaceModel, WorkspaceResource};
