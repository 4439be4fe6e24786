//! Workspace members module - membership resource and data sources

mod api;
mod commands;
mod models;
mod resource;

pub use commands::{run_member_command, run_members_command};
pub use models::{
    CreateWorkspaceMemberRequest, UpdateWorkspaceMemberRequest, WorkspaceMember,
    WorkspaceMemberModel, WorkspaceMembersDataSourceModel, WORKSPACE_ROLES,
};
pub use resource::{WorkspaceMemberResource, WORKSPACE_MEMBER_SCHEMA};
