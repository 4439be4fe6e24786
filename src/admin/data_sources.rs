//! Read-only lookups over the Admin API
//!
//! Each function fetches remote records and projects them onto the local
//! model types. Unlike a managed resource read, a missing entity is an error.

use log::debug;

use crate::admin::invites::OrganizationInvitesDataSourceModel;
use crate::admin::traits::Populate;
use crate::admin::users::{UserModel, UsersDataSourceModel};
use crate::admin::workspace_members::{WorkspaceMemberModel, WorkspaceMembersDataSourceModel};
use crate::admin::workspaces::{WorkspaceModel, WorkspacesDataSourceModel};
use crate::admin::AdminClient;
use crate::error::Result;

/// Get a user in the organization
pub async fn read_user(client: &AdminClient, user_id: &str) -> Result<UserModel> {
    let mut model = UserModel::default();
    model.populate_from(client.get_user(user_id).await?)?;
    Ok(model)
}

/// List all users in the organization
pub async fn read_users(client: &AdminClient) -> Result<UsersDataSourceModel> {
    let users = client.list_users().await?;
    debug!("Found {} users", users.len());

    let mut model = UsersDataSourceModel::default();
    model.populate_from(users)?;
    Ok(model)
}

/// Get a workspace by ID
pub async fn read_workspace(client: &AdminClient, workspace_id: &str) -> Result<WorkspaceModel> {
    let mut model = WorkspaceModel::default();
    model.populate_from(client.get_workspace(workspace_id).await?)?;
    Ok(model)
}

/// List workspaces, archived ones only when asked for
pub async fn read_workspaces(
    client: &AdminClient,
    include_archived: bool,
) -> Result<WorkspacesDataSourceModel> {
    let workspaces = client.list_workspaces(include_archived).await?;
    debug!(
        "Found {} workspaces (include_archived={})",
        workspaces.len(),
        include_archived
    );

    let mut model = WorkspacesDataSourceModel::default();
    model.populate_from(workspaces)?;
    Ok(model)
}

/// Get the membership of one user in one workspace
pub async fn read_workspace_member(
    client: &AdminClient,
    workspace_id: &str,
    user_id: &str,
) -> Result<WorkspaceMemberModel> {
    let mut model = WorkspaceMemberModel::default();
    model.populate_from(client.get_workspace_member(workspace_id, user_id).await?)?;
    Ok(model)
}

/// List all members of a workspace
pub async fn read_workspace_members(
    client: &AdminClient,
    workspace_id: &str,
) -> Result<WorkspaceMembersDataSourceModel> {
    let members = client.list_workspace_members(workspace_id).await?;
    debug!("Found {} members in workspace {}", members.len(), workspace_id);

    let mut model = WorkspaceMembersDataSourceModel {
        workspace_id: workspace_id.to_string(),
        members: Vec::new(),
    };
    model.populate_from(members)?;
    Ok(model)
}

/// List all invites of the organization
pub async fn read_organization_invites(
    client: &AdminClient,
) -> Result<OrganizationInvitesDataSourceModel> {
    let invites = client.list_invites().await?;
    debug!("Found {} invites", invites.len());

    let mut model = OrganizationInvitesDataSourceModel::default();
    model.populate_from(invites)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_read_users_collects_all_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/users"))
            .and(query_param("after_id", "user_02"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "user_03", "type": "user", "email": "c@example.com",
                    "name": "C", "role": "admin", "added_at": "2024-01-03T00:00:00Z"
                }],
                "has_more": false,
                "first_id": "user_03",
                "last_id": "user_03"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "id": "user_01", "type": "user", "email": "a@example.com",
                        "name": "A", "role": "user", "added_at": "2024-01-01T00:00:00Z"
                    },
                    {
                        "id": "user_02", "type": "user", "email": "b@example.com",
                        "name": "B", "role": "developer", "added_at": "2024-01-02T00:00:00Z"
                    }
                ],
                "has_more": true,
                "first_id": "user_01",
                "last_id": "user_02"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let model = read_users(&client).await.unwrap();

        let ids: Vec<&str> = model.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["user_01", "user_02", "user_03"]);
    }

    #[tokio::test]
    async fn test_read_workspace_missing_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let err = read_workspace(&client, "wrkspc_gone").await.unwrap_err();
        assert!(matches!(err, AdminError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_read_workspace_members_keeps_workspace_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "has_more": false,
                "first_id": null,
                "last_id": null
            })))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let model = read_workspace_members(&client, "wrkspc_01").await.unwrap();
        assert_eq!(model.workspace_id, "wrkspc_01");
        assert!(model.members.is_empty());
    }

    #[tokio::test]
    async fn test_read_invites_list_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/invites"))
            .respond_with(ResponseTemplate::new(401).set_body_string("authentication_error"))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let err = read_organization_invites(&client).await.unwrap_err();
        assert!(err.to_string().contains("authentication_error"));
    }
}
