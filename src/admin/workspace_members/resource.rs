//! Workspace member managed resource

use async_trait::async_trait;

use crate::admin::ids::{build_two_part_id, split_two_part_id};
use crate::admin::schema::{FieldDescriptor, ResourceSchema};
use crate::admin::traits::ManagedResource;
use crate::admin::AdminClient;
use crate::error::Result;

use super::models::{
    CreateWorkspaceMemberRequest, UpdateWorkspaceMemberRequest, WorkspaceMember,
    WorkspaceMemberModel, WORKSPACE_ROLES,
};

pub static WORKSPACE_MEMBER_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "workspace_member",
    description: "Workspace membership, imported as <workspace_id>/<user_id>.",
    fields: &[
        FieldDescriptor::required(
            "workspace_id",
            "ID of the Workspace to which the member belongs.",
        )
        .requires_replace(),
        FieldDescriptor::required("user_id", "ID of the user who is a member of the Workspace.")
            .requires_replace(),
        FieldDescriptor::required(
            "workspace_role",
            "Role of the Workspace Member. Must be one of `workspace_user`, `workspace_developer`, or `workspace_admin`.",
        )
        .one_of(WORKSPACE_ROLES),
    ],
};

/// Workspace memberships, keyed by `<workspace_id>/<user_id>`
pub struct WorkspaceMemberResource;

#[async_trait]
impl ManagedResource for WorkspaceMemberResource {
    type Model = WorkspaceMemberModel;
    type Remote = WorkspaceMember;

    fn schema(&self) -> &'static ResourceSchema {
        &WORKSPACE_MEMBER_SCHEMA
    }

    fn state_id(&self, model: &WorkspaceMemberModel) -> Result<String> {
        Ok(build_two_part_id(&model.workspace_id, &model.user_id))
    }

    fn import_model(&self, id: &str) -> Result<WorkspaceMemberModel> {
        let (workspace_id, user_id) = split_two_part_id(id, "workspace_id", "user_id")?;
        Ok(WorkspaceMemberModel {
            workspace_id,
            user_id,
            ..Default::default()
        })
    }

    async fn create(
        &self,
        client: &AdminClient,
        desired: &WorkspaceMemberModel,
    ) -> Result<WorkspaceMember> {
        client
            .create_workspace_member(
                &desired.workspace_id,
                &CreateWorkspaceMemberRequest {
                    user_id: desired.user_id.clone(),
                    workspace_role: desired.workspace_role.clone(),
                },
            )
            .await
    }

    async fn read(
        &self,
        client: &AdminClient,
        current: &WorkspaceMemberModel,
    ) -> Result<Option<WorkspaceMember>> {
        client
            .find_workspace_member(&current.workspace_id, &current.user_id)
            .await
    }

    async fn fetch(
        &self,
        client: &AdminClient,
        current: &WorkspaceMemberModel,
    ) -> Result<WorkspaceMember> {
        client
            .get_workspace_member(&current.workspace_id, &current.user_id)
            .await
    }

    async fn update(
        &self,
        client: &AdminClient,
        desired: &WorkspaceMemberModel,
    ) -> Result<WorkspaceMember> {
        client
            .update_workspace_member(
                &desired.workspace_id,
                &desired.user_id,
                &UpdateWorkspaceMemberRequest {
                    workspace_role: desired.workspace_role.clone(),
                },
            )
            .await
    }

    async fn delete(&self, client: &AdminClient, current: &WorkspaceMemberModel) -> Result<()> {
        client
            .delete_workspace_member(&current.workspace_id, &current.user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::schema::PlanAction;
    use crate::admin::Reconciler;
    use crate::error::AdminError;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn member_json(role: &str) -> serde_json::Value {
        serde_json::json!({
            "type": "workspace_member",
            "workspace_id": "wrkspc_01",
            "user_id": "user_01",
            "workspace_role": role
        })
    }

    fn member(role: &str) -> WorkspaceMemberModel {
        WorkspaceMemberModel {
            workspace_id: "wrkspc_01".to_string(),
            user_id: "user_01".to_string(),
            workspace_role: role.to_string(),
        }
    }

    fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_state_id_is_composite() {
        let id = WorkspaceMemberResource
            .state_id(&member("workspace_user"))
            .unwrap();
        assert_eq!(id, "wrkspc_01/user_01");
    }

    #[test]
    fn test_import_model_parses_composite_id() {
        let model = WorkspaceMemberResource
            .import_model("wrkspc_01/user_01")
            .unwrap();
        assert_eq!(model.workspace_id, "wrkspc_01");
        assert_eq!(model.user_id, "user_01");
        assert!(model.workspace_role.is_empty());
    }

    #[test]
    fn test_schema_rejects_unknown_role() {
        let config = object(serde_json::json!({
            "workspace_id": "wrkspc_01",
            "user_id": "user_01",
            "workspace_role": "owner"
        }));
        let err = WORKSPACE_MEMBER_SCHEMA.validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("workspace_user"));
    }

    #[test]
    fn test_plan_role_change_is_update_and_move_is_replace() {
        let prior = object(serde_json::to_value(member("workspace_user")).unwrap());

        let role_change = object(serde_json::to_value(member("workspace_admin")).unwrap());
        assert_eq!(
            WORKSPACE_MEMBER_SCHEMA.plan(&prior, &role_change),
            PlanAction::Update
        );

        let mut moved = member("workspace_user");
        moved.workspace_id = "wrkspc_02".to_string();
        let moved = object(serde_json::to_value(moved).unwrap());
        assert_eq!(
            WORKSPACE_MEMBER_SCHEMA.plan(&prior, &moved),
            PlanAction::Replace
        );
    }

    #[tokio::test]
    async fn test_update_sends_only_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members/user_01"))
            .and(body_json(serde_json::json!({ "workspace_role": "workspace_admin" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(member_json("workspace_admin")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        let updated = reconciler
            .update(&member("workspace_admin"))
            .await
            .unwrap();
        assert_eq!(updated, member("workspace_admin"));
    }

    #[tokio::test]
    async fn test_read_refreshes_role_changed_elsewhere() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members/user_01"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(member_json("workspace_developer")),
            )
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        let read = reconciler.read(&member("workspace_user")).await.unwrap();
        assert_eq!(read, Some(member("workspace_developer")));
    }

    #[tokio::test]
    async fn test_read_absent_member_drops_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members/user_01"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        assert_eq!(reconciler.read(&member("workspace_user")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_import_fetches_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members/user_01"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(member_json("workspace_developer")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        let imported = reconciler.import("wrkspc_01/user_01").await.unwrap();
        assert_eq!(imported, member("workspace_developer"));
    }

    #[tokio::test]
    async fn test_import_non_member_reports_upstream_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members/user_09"))
            .respond_with(ResponseTemplate::new(404).set_body_string("user is not a member"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        match reconciler.import("wrkspc_01/user_09").await {
            Err(AdminError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert!(message.contains("user is not a member"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_import_malformed_id_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        for id in ["wrkspc_01", "wrkspc_01/", "/user_01", "a/b/c"] {
            assert!(matches!(
                reconciler.import(id).await,
                Err(AdminError::InvalidId(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_delete_failure_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/organizations/workspaces/wrkspc_01/members/user_01"))
            .respond_with(ResponseTemplate::new(403).set_body_string("permission_error"))
            .mount(&mock_server)
            .await;

        let client = AdminClient::test_client(&mock_server.uri());
        let reconciler = Reconciler::new(&client, WorkspaceMemberResource);

        match reconciler.delete(&member("workspace_user")).await {
            Err(AdminError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert!(message.contains("permission_error"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }
}
