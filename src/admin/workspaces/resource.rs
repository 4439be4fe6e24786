//! Workspace managed resource

use async_trait::async_trait;

use crate::admin::schema::{FieldDescriptor, ResourceSchema};
use crate::admin::traits::ManagedResource;
use crate::admin::AdminClient;
use crate::error::{AdminError, Result};

use super::models::{CreateWorkspaceRequest, UpdateWorkspaceRequest, Workspace, WorkspaceModel};

pub static WORKSPACE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "workspace",
    description: "Workspace resource. Deleting it archives the workspace.",
    fields: &[
        FieldDescriptor::computed("id", "ID of the Workspace."),
        FieldDescriptor::required("name", "Name of the Workspace."),
        FieldDescriptor::computed(
            "created_at",
            "RFC 3339 datetime string indicating when the Workspace was created.",
        ),
        FieldDescriptor::computed(
            "archived_at",
            "RFC 3339 datetime string indicating when the Workspace was archived, or null if the Workspace is not archived.",
        ),
        FieldDescriptor::computed(
            "display_color",
            "Hex color code representing the Workspace in the Anthropic Console.",
        ),
    ],
};

/// Workspaces: renamed in place, archived on delete
pub struct WorkspaceResource;

impl WorkspaceResource {
    fn id<'m>(&self, model: &'m WorkspaceModel) -> Result<&'m str> {
        model
            .id
            .as_deref()
            .ok_or_else(|| AdminError::State("workspace has no id".to_string()))
    }
}

#[async_trait]
impl ManagedResource for WorkspaceResource {
    type Model = WorkspaceModel;
    type Remote = Workspace;

    fn schema(&self) -> &'static ResourceSchema {
        &WORKSPACE_SCHEMA
    }

    fn state_id(&self, model: &WorkspaceModel) -> Result<String> {
        self.id(model).map(str::to_string)
    }

    fn import_model(&self, id: &str) -> Result<WorkspaceModel> {
        Ok(WorkspaceModel {
            id: Some(id.to_string()),
            ..Default::default()
        })
    }

    async fn create(&self, client: &AdminClient, desired: &WorkspaceModel) -> Result<Workspace> {
        client
            .create_workspace(&CreateWorkspaceRequest {
                name: desired.name.clone(),
            })
            .await
    }

    async fn read(
        &self,
        client: &AdminClient,
        current: &WorkspaceModel,
    ) -> Result<Option<Workspace>> {
        client.find_workspace(self.id(current)?).await
    }

    async fn fetch(&self, client: &AdminClient, current: &WorkspaceModel) -> Result<Workspace> {
        client.get_workspace(self.id(current)?).await
    }

    async fn update(&self, client: &AdminClient, desired: &WorkspaceModel) -> Result<Workspace> {
        client
            .update_workspace(
                self.id(desired)?,
                &UpdateWorkspaceRequest {
                    name: desired.name.clone(),
                },
            )
            .await
    }

    async fn delete(&self, client: &AdminClient, current: &WorkspaceModel) -> Result<()> {
        client.archive_workspace(self.id(current)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::Reconciler;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "workspace",
            "name": name,
            "created_at": "2024-10-30T23:58:27.427722Z",
            "archived_at": null,
            "display_color": "#6C5BB9"
        })
    }

    fn stored(id: &str, name: &str) -> WorkspaceModel {
        WorkspaceModel {
            id: Some(id.to_string()),
            name: name.to_string(),
            created_at: Some("2024-10-30T23:58:27.427722Z".to_string()),
            archived_at: None,
            display_color: Some("#6C5BB9".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_read_project_identically() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_01", "Prod")),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_01", "Prod")),
            )
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let desired = WorkspaceModel {
            name: "Prod".to_string(),
            ..Default::default()
        };
        let created = reconciler.create(&desired).await.unwrap();
        assert_eq!(created, stored("wrkspc_01", "Prod"));

        let read = reconciler.read(&created).await.unwrap();
        assert_eq!(read, Some(created));
    }

    #[tokio::test]
    async fn test_create_failure_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces"))
            .respond_with(ResponseTemplate::new(400).set_body_string("name already taken"))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let desired = WorkspaceModel {
            name: "Dup".to_string(),
            ..Default::default()
        };
        match reconciler.create(&desired).await {
            Err(AdminError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("name already taken"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_with_empty_body_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let desired = WorkspaceModel {
            name: "Prod".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            reconciler.create(&desired).await,
            Err(AdminError::EmptyBody(_))
        ));
    }

    #[tokio::test]
    async fn test_read_absent_drops_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let result = reconciler.read(&stored("wrkspc_gone", "Old")).await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_read_server_error_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let err = reconciler
            .read(&stored("wrkspc_01", "Prod"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_update_renames_and_refreshes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces/wrkspc_01"))
            .and(body_json(serde_json::json!({ "name": "Renamed" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_01", "Renamed")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let updated = reconciler
            .update(&stored("wrkspc_01", "Renamed"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_archives() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/archive"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_01", "Prod")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);
        assert!(reconciler.delete(&stored("wrkspc_01", "Prod")).await.is_ok());
    }

    #[tokio::test]
    async fn test_import_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(workspace_json("wrkspc_01", "Prod")),
            )
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let imported = reconciler.import("wrkspc_01").await.unwrap();
        assert_eq!(imported, stored("wrkspc_01", "Prod"));
    }

    #[tokio::test]
    async fn test_import_missing_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_nope"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"type":"error","error":{"type":"not_found_error","message":"Workspace not found"}}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceResource);

        let err = reconciler.import("wrkspc_nope").await.unwrap_err();
        assert!(err.is_not_found());
        match err {
            AdminError::Api { message, .. } => {
                assert!(message.contains("read workspace 'wrkspc_nope'"));
                assert!(message.contains("not_found_error"));
                assert!(message.contains("Workspace not found"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_state_id_requires_id() {
        let model = WorkspaceModel::default();
        assert!(WorkspaceResource.state_id(&model).is_err());
    }
}
