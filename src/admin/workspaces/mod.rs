//! Workspaces module - workspace resource and data sources

mod api;
mod commands;
mod models;
mod resource;

pub use commands::{run_workspace_command, run_workspaces_command};
pub use models::{
    CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace, WorkspaceModel,
    WorkspacesDataSourceModel,
};
pub use resource::{WorkspaceResource, WORKSPACE_SCHEMA};
