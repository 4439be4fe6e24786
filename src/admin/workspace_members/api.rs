//! Workspace member API operations

use log::debug;

use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateWorkspaceMemberRequest, UpdateWorkspaceMemberRequest, WorkspaceMember};

fn members_path(workspace_id: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::WORKSPACES,
        urlencoding::encode(workspace_id),
        api::MEMBERS
    )
}

fn member_path(workspace_id: &str, user_id: &str) -> String {
    format!(
        "{}/{}",
        members_path(workspace_id),
        urlencoding::encode(user_id)
    )
}

impl AdminClient {
    /// List members of a workspace (with pagination)
    pub async fn list_workspace_members(&self, workspace_id: &str) -> Result<Vec<WorkspaceMember>> {
        self.fetch_all_pages(
            &members_path(workspace_id),
            &format!("members of workspace '{}'", workspace_id),
        )
        .await
    }

    /// Get one membership; 404 is an error
    pub async fn get_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<WorkspaceMember> {
        self.get_resource(
            &member_path(workspace_id, user_id),
            &format!("read member '{}' of workspace '{}'", user_id, workspace_id),
        )
        .await
    }

    /// Get one membership, `None` if the user is not a member
    pub async fn find_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<Option<WorkspaceMember>> {
        self.find_resource(
            &member_path(workspace_id, user_id),
            &format!("read member '{}' of workspace '{}'", user_id, workspace_id),
        )
        .await
    }

    /// Add a user to a workspace
    pub async fn create_workspace_member(
        &self,
        workspace_id: &str,
        request: &CreateWorkspaceMemberRequest,
    ) -> Result<WorkspaceMember> {
        debug!(
            "Adding user {} to workspace {} as {}",
            request.user_id, workspace_id, request.workspace_role
        );
        let builder = self.post(&members_path(workspace_id)).json(request);
        self.send_json(
            builder,
            &format!(
                "add member '{}' to workspace '{}'",
                request.user_id, workspace_id
            ),
        )
        .await
    }

    /// Change a member's workspace role
    pub async fn update_workspace_member(
        &self,
        workspace_id: &str,
        user_id: &str,
        request: &UpdateWorkspaceMemberRequest,
    ) -> Result<WorkspaceMember> {
        debug!(
            "Changing role of user {} in workspace {} to {}",
            user_id, workspace_id, request.workspace_role
        );
        let builder = self
            .post(&member_path(workspace_id, user_id))
            .json(request);
        self.send_json(
            builder,
            &format!("update member '{}' of workspace '{}'", user_id, workspace_id),
        )
        .await
    }

    /// Remove a user from a workspace
    pub async fn delete_workspace_member(&self, workspace_id: &str, user_id: &str) -> Result<()> {
        debug!("Removing user {} from workspace {}", user_id, workspace_id);
        self.send_expect_ok(
            self.delete(&member_path(workspace_id, user_id)),
            &format!("remove member '{}' from workspace '{}'", user_id, workspace_id),
        )
        .await
    }
}
