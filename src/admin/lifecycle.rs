//! Lifecycle driver: untyped attributes in, typed reconciler calls out
//!
//! The CLI and the state file only deal in JSON attribute maps. This module
//! validates those maps against the resource schema, converts them into the
//! typed model of the chosen resource and hands them to a [`Reconciler`].

use std::fmt;

use clap::builder::PossibleValue;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::admin::invites::OrganizationInviteResource;
use crate::admin::schema::{PlanAction, ResourceSchema};
use crate::admin::traits::ManagedResource;
use crate::admin::workspace_members::WorkspaceMemberResource;
use crate::admin::workspaces::WorkspaceResource;
use crate::admin::{AdminClient, Reconciler};
use crate::error::{AdminError, Result};

/// Kinds of entity that can be managed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Workspace,
    WorkspaceMember,
    OrganizationInvite,
}

impl ValueEnum for ResourceType {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            ResourceType::Workspace,
            ResourceType::WorkspaceMember,
            ResourceType::OrganizationInvite,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()).help(self.schema().description))
    }
}

impl ResourceType {
    pub fn schema(&self) -> &'static ResourceSchema {
        match self {
            ResourceType::Workspace => WorkspaceResource.schema(),
            ResourceType::WorkspaceMember => WorkspaceMemberResource.schema(),
            ResourceType::OrganizationInvite => OrganizationInviteResource.schema(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.schema().type_name
    }

    /// Validate a configuration and decide how it applies to existing state
    pub fn plan(&self, prior: &EntityState, config: &Map<String, Value>) -> Result<PlanAction> {
        self.check_state(prior)?;
        let schema = self.schema();
        schema.validate_config(config)?;
        Ok(schema.plan(&prior.attributes, config))
    }

    /// Create a new entity from configuration
    pub async fn create(
        &self,
        client: &AdminClient,
        config: &Map<String, Value>,
    ) -> Result<EntityState> {
        self.schema().validate_config(config)?;
        match self {
            ResourceType::Workspace => {
                create_typed(client, *self, WorkspaceResource, config).await
            }
            ResourceType::WorkspaceMember => {
                create_typed(client, *self, WorkspaceMemberResource, config).await
            }
            ResourceType::OrganizationInvite => {
                create_typed(client, *self, OrganizationInviteResource, config).await
            }
        }
    }

    /// Refresh a state entry, `None` if the entity no longer exists
    pub async fn read(
        &self,
        client: &AdminClient,
        current: &EntityState,
    ) -> Result<Option<EntityState>> {
        self.check_state(current)?;
        match self {
            ResourceType::Workspace => {
                read_typed(client, *self, WorkspaceResource, current).await
            }
            ResourceType::WorkspaceMember => {
                read_typed(client, *self, WorkspaceMemberResource, current).await
            }
            ResourceType::OrganizationInvite => {
                read_typed(client, *self, OrganizationInviteResource, current).await
            }
        }
    }

    /// Apply a configuration in place
    ///
    /// Callers are expected to have planned [`PlanAction::Update`]; computed
    /// attributes are carried over from `prior`.
    pub async fn update(
        &self,
        client: &AdminClient,
        prior: &EntityState,
        config: &Map<String, Value>,
    ) -> Result<EntityState> {
        self.check_state(prior)?;
        let schema = self.schema();
        schema.validate_config(config)?;
        let desired = schema.merge(&prior.attributes, config);

        match self {
            ResourceType::Workspace => {
                update_typed(client, *self, WorkspaceResource, &desired).await
            }
            ResourceType::WorkspaceMember => {
                update_typed(client, *self, WorkspaceMemberResource, &desired).await
            }
            ResourceType::OrganizationInvite => {
                update_typed(client, *self, OrganizationInviteResource, &desired).await
            }
        }
    }

    /// Delete the entity behind a state entry
    pub async fn delete(&self, client: &AdminClient, current: &EntityState) -> Result<()> {
        self.check_state(current)?;
        match self {
            ResourceType::Workspace => delete_typed(client, WorkspaceResource, current).await,
            ResourceType::WorkspaceMember => {
                delete_typed(client, WorkspaceMemberResource, current).await
            }
            ResourceType::OrganizationInvite => {
                delete_typed(client, OrganizationInviteResource, current).await
            }
        }
    }

    /// Adopt an existing entity by its import identifier
    pub async fn import(&self, client: &AdminClient, id: &str) -> Result<EntityState> {
        match self {
            ResourceType::Workspace => import_typed(client, *self, WorkspaceResource, id).await,
            ResourceType::WorkspaceMember => {
                import_typed(client, *self, WorkspaceMemberResource, id).await
            }
            ResourceType::OrganizationInvite => {
                import_typed(client, *self, OrganizationInviteResource, id).await
            }
        }
    }

    fn check_state(&self, state: &EntityState) -> Result<()> {
        if state.resource_type != *self {
            return Err(AdminError::State(format!(
                "entry '{}' is a {}, not a {}",
                state.id, state.resource_type, self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Last known projection of one remote entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntityState {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Remote identifier (composite for workspace members)
    pub id: String,
    pub attributes: Map<String, Value>,
}

impl EntityState {
    fn from_model<R: ManagedResource>(
        resource_type: ResourceType,
        resource: &R,
        model: &R::Model,
    ) -> Result<Self> {
        let attributes = match serde_json::to_value(model)? {
            Value::Object(map) => map,
            other => {
                return Err(AdminError::Json(format!(
                    "{} serialized to {} instead of an object",
                    resource_type, other
                )))
            }
        };
        Ok(Self {
            resource_type,
            id: resource.state_id(model)?,
            attributes,
        })
    }
}

/// Build a typed model from attributes; nulls fall back to the model default
fn model_from<M: DeserializeOwned>(attributes: &Map<String, Value>) -> Result<M> {
    let present: Map<String, Value> = attributes
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(serde_json::from_value(Value::Object(present))?)
}

async fn create_typed<R: ManagedResource>(
    client: &AdminClient,
    resource_type: ResourceType,
    resource: R,
    config: &Map<String, Value>,
) -> Result<EntityState> {
    let desired: R::Model = model_from(config)?;
    let reconciler = Reconciler::new(client, resource);
    let model = reconciler.create(&desired).await?;
    EntityState::from_model(resource_type, reconciler.resource(), &model)
}

async fn read_typed<R: ManagedResource>(
    client: &AdminClient,
    resource_type: ResourceType,
    resource: R,
    current: &EntityState,
) -> Result<Option<EntityState>> {
    let current_model: R::Model = model_from(&current.attributes)?;
    let reconciler = Reconciler::new(client, resource);
    match reconciler.read(&current_model).await? {
        Some(model) => Ok(Some(EntityState::from_model(
            resource_type,
            reconciler.resource(),
            &model,
        )?)),
        None => Ok(None),
    }
}

async fn update_typed<R: ManagedResource>(
    client: &AdminClient,
    resource_type: ResourceType,
    resource: R,
    desired: &Map<String, Value>,
) -> Result<EntityState> {
    let desired_model: R::Model = model_from(desired)?;
    let reconciler = Reconciler::new(client, resource);
    let model = reconciler.update(&desired_model).await?;
    EntityState::from_model(resource_type, reconciler.resource(), &model)
}

async fn delete_typed<R: ManagedResource>(
    client: &AdminClient,
    resource: R,
    current: &EntityState,
) -> Result<()> {
    let current_model: R::Model = model_from(&current.attributes)?;
    Reconciler::new(client, resource)
        .delete(&current_model)
        .await
}

async fn import_typed<R: ManagedResource>(
    client: &AdminClient,
    resource_type: ResourceType,
    resource: R,
    id: &str,
) -> Result<EntityState> {
    let reconciler = Reconciler::new(client, resource);
    let model = reconciler.import(id).await?;
    EntityState::from_model(resource_type, reconciler.resource(), &model)
}
