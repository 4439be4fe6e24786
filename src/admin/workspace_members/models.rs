//! Workspace member data models

use serde::{Deserialize, Serialize};

use crate::admin::traits::Populate;
use crate::error::Result;

/// Roles a user can hold inside a workspace
pub const WORKSPACE_ROLES: &[&str] = &["workspace_user", "workspace_developer", "workspace_admin"];

/// Workspace member record from the Admin API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceMember {
    #[serde(rename = "type", default)]
    pub member_type: Option<String>,
    pub workspace_id: String,
    pub user_id: String,
    pub workspace_role: String,
}

/// Local projection of a workspace membership
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkspaceMemberModel {
    pub workspace_id: String,
    pub user_id: String,
    pub workspace_role: String,
}

impl Populate<WorkspaceMember> for WorkspaceMemberModel {
    fn populate_from(&mut self, member: WorkspaceMember) -> Result<()> {
        self.workspace_id = member.workspace_id;
        self.user_id = member.user_id;
        self.workspace_role = member.workspace_role;
        Ok(())
    }
}

/// Members of one workspace
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkspaceMembersDataSourceModel {
    pub workspace_id: String,
    pub members: Vec<WorkspaceMemberModel>,
}

impl Populate<Vec<WorkspaceMember>> for WorkspaceMembersDataSourceModel {
    fn populate_from(&mut self, members: Vec<WorkspaceMember>) -> Result<()> {
        self.members.populate_from(members)
    }
}

/// Request payload for adding a member to a workspace
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceMemberRequest {
    pub user_id: String,
    pub workspace_role: String,
}

/// Request payload for changing a member's role
#[derive(Serialize, Debug)]
pub struct UpdateWorkspaceMemberRequest {
    pub workspace_role: String,
}
