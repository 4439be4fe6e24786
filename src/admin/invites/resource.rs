//! Organization invite managed resource

use async_trait::async_trait;

use crate::admin::schema::{FieldDescriptor, ResourceSchema};
use crate::admin::traits::ManagedResource;
use crate::admin::AdminClient;
use crate::error::{AdminError, Result};

use super::models::{CreateInviteRequest, Invite, OrganizationInviteModel, ORGANIZATION_ROLES};

pub static ORGANIZATION_INVITE_SCHEMA: ResourceSchema = ResourceSchema {
    type_name: "organization_invite",
    description: "Organization invite resource. Manages invitations to join an organization.",
    fields: &[
        FieldDescriptor::computed("id", "Unique identifier for the invite."),
        FieldDescriptor::required("email", "Email address of the person being invited.")
            .requires_replace(),
        FieldDescriptor::required(
            "role",
            "Role to assign to the invited user. Must be one of `user`, `developer`, `billing`, `admin`, or `claude_code_user`.",
        )
        .one_of(ORGANIZATION_ROLES)
        .requires_replace(),
        FieldDescriptor::computed(
            "status",
            "Current status of the invite (e.g., pending, accepted, expired).",
        ),
        FieldDescriptor::computed("created_at", "Timestamp when the invite was created."),
        FieldDescriptor::computed("expires_at", "Timestamp when the invite expires."),
    ],
};

/// Invites cannot be edited; any change means a new invite
pub struct OrganizationInviteResource;

impl OrganizationInviteResource {
    fn id<'m>(&self, model: &'m OrganizationInviteModel) -> Result<&'m str> {
        model
            .id
            .as_deref()
            .ok_or_else(|| AdminError::State("invite has no id".to_string()))
    }
}

#[async_trait]
impl ManagedResource for OrganizationInviteResource {
    type Model = OrganizationInviteModel;
    type Remote = Invite;

    fn schema(&self) -> &'static ResourceSchema {
        &ORGANIZATION_INVITE_SCHEMA
    }

    fn state_id(&self, model: &OrganizationInviteModel) -> Result<String> {
        self.id(model).map(str::to_string)
    }

    fn import_model(&self, id: &str) -> Result<OrganizationInviteModel> {
        Ok(OrganizationInviteModel {
            id: Some(id.to_string()),
            ..Default::default()
        })
    }

    async fn create(
        &self,
        client: &AdminClient,
        desired: &OrganizationInviteModel,
    ) -> Result<Invite> {
        client
            .create_invite(&CreateInviteRequest {
                email: desired.email.clone(),
                role: desired.role.clone(),
            })
            .await
    }

    async fn read(
        &self,
        client: &AdminClient,
        current: &OrganizationInviteModel,
    ) -> Result<Option<Invite>> {
        client.find_invite(self.id(current)?).await
    }

    async fn fetch(
        &self,
        client: &AdminClient,
        current: &OrganizationInviteModel,
    ) -> Result<Invite> {
        client.get_invite(self.id(current)?).await
    }

    async fn update(
        &self,
        _client: &AdminClient,
        _desired: &OrganizationInviteModel,
    ) -> Result<Invite> {
        Err(AdminError::Unsupported(
            "Organization invites cannot be updated. Any changes require creating a new invite."
                .to_string(),
        ))
    }

    async fn delete(&self, client: &AdminClient, current: &OrganizationInviteModel) -> Result<()> {
        client.delete_invite(self.id(current)?).await
    }
}
