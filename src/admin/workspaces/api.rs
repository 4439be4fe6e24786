//! Workspace API operations

use log::debug;

use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace};

fn workspace_path(workspace_id: &str) -> String {
    format!("/{}/{}", api::WORKSPACES, urlencoding::encode(workspace_id))
}

impl AdminClient {
    /// List workspaces (with pagination), optionally including archived ones
    pub async fn list_workspaces(&self, include_archived: bool) -> Result<Vec<Workspace>> {
        let path = if include_archived {
            format!("/{}?include_archived=true", api::WORKSPACES)
        } else {
            format!("/{}", api::WORKSPACES)
        };
        self.fetch_all_pages(&path, "workspaces").await
    }

    /// Get a workspace by ID; 404 is an error
    pub async fn get_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        self.get_resource(
            &workspace_path(workspace_id),
            &format!("read workspace '{}'", workspace_id),
        )
        .await
    }

    /// Get a workspace by ID, `None` if it does not exist
    pub async fn find_workspace(&self, workspace_id: &str) -> Result<Option<Workspace>> {
        self.find_resource(
            &workspace_path(workspace_id),
            &format!("read workspace '{}'", workspace_id),
        )
        .await
    }

    /// Create a workspace
    pub async fn create_workspace(&self, request: &CreateWorkspaceRequest) -> Result<Workspace> {
        debug!("Creating workspace '{}'", request.name);
        let builder = self.post(&format!("/{}", api::WORKSPACES)).json(request);
        self.send_json(builder, &format!("create workspace '{}'", request.name))
            .await
    }

    /// Rename a workspace
    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        request: &UpdateWorkspaceRequest,
    ) -> Result<Workspace> {
        debug!("Updating workspace {} to '{}'", workspace_id, request.name);
        let builder = self.post(&workspace_path(workspace_id)).json(request);
        self.send_json(builder, &format!("update workspace '{}'", workspace_id))
            .await
    }

    /// Archive a workspace (the API has no hard delete)
    pub async fn archive_workspace(&self, workspace_id: &str) -> Result<()> {
        debug!("Archiving workspace {}", workspace_id);
        let path = format!("{}/archive", workspace_path(workspace_id));
        self.send_expect_ok(
            self.post(&path),
            &format!("archive workspace '{}'", workspace_id),
        )
        .await
    }
}
