//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::admin::traits::Populate;
use crate::error::Result;

/// Workspace record from the Admin API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    #[serde(rename = "type", default)]
    pub workspace_type: Option<String>,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub archived_at: Option<String>,
    pub display_color: String,
}

/// Local projection of a workspace
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspaceModel {
    pub id: Option<String>,
    pub name: String,
    pub created_at: Option<String>,
    /// Null unless the workspace is archived
    pub archived_at: Option<String>,
    pub display_color: Option<String>,
}

impl Populate<Workspace> for WorkspaceModel {
    fn populate_from(&mut self, workspace: Workspace) -> Result<()> {
        self.id = Some(workspace.id);
        self.name = workspace.name;
        self.created_at = Some(workspace.created_at);
        self.archived_at = workspace.archived_at;
        self.display_color = Some(workspace.display_color);
        Ok(())
    }
}

/// All workspaces in the organization
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkspacesDataSourceModel {
    pub workspaces: Vec<WorkspaceModel>,
}

impl Populate<Vec<Workspace>> for WorkspacesDataSourceModel {
    fn populate_from(&mut self, workspaces: Vec<Workspace>) -> Result<()> {
        self.workspaces.populate_from(workspaces)
    }
}

/// Request payload for creating a workspace
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceRequest {
    pub name: String,
}

/// Request payload for updating a workspace
#[derive(Serialize, Debug)]
pub struct UpdateWorkspaceRequest {
    pub name: String,
}
