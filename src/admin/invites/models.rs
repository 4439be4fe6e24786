//! Organization invite data models

use serde::{Deserialize, Serialize};

use crate::admin::traits::Populate;
use crate::error::Result;

/// Organization roles an invite can grant
pub const ORGANIZATION_ROLES: &[&str] = &["user", "developer", "billing", "admin", "claude_code_user"];

/// Invite record from the Admin API
#[derive(Deserialize, Debug, Clone)]
pub struct Invite {
    pub id: String,
    #[serde(rename = "type", default)]
    pub invite_type: Option<String>,
    pub email: String,
    pub role: String,
    /// `pending`, `accepted`, `expired` or `deleted`
    pub status: String,
    #[serde(rename = "invited_at", alias = "created_at")]
    pub created_at: String,
    pub expires_at: String,
}

/// Local projection of an invite
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OrganizationInviteModel {
    pub id: Option<String>,
    pub email: String,
    pub role: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub expires_at: Option<String>,
}

impl Populate<Invite> for OrganizationInviteModel {
    fn populate_from(&mut self, invite: Invite) -> Result<()> {
        self.id = Some(invite.id);
        self.email = invite.email;
        self.role = invite.role;
        self.status = Some(invite.status);
        self.created_at = Some(invite.created_at);
        self.expires_at = Some(invite.expires_at);
        Ok(())
    }
}

/// All invites of the organization
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OrganizationInvitesDataSourceModel {
    pub invites: Vec<OrganizationInviteModel>,
}

impl Populate<Vec<Invite>> for OrganizationInvitesDataSourceModel {
    fn populate_from(&mut self, invites: Vec<Invite>) -> Result<()> {
        self.invites.populate_from(invites)
    }
}

/// Request payload for creating an invite
#[derive(Serialize, Debug)]
pub struct CreateInviteRequest {
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_invite_with_invited_at() {
        let invite: Invite = serde_json::from_value(serde_json::json!({
            "id": "invite_01",
            "type": "invite",
            "email": "new@example.com",
            "role": "developer",
            "status": "pending",
            "invited_at": "2024-10-30T23:58:27.427722Z",
            "expires_at": "2024-11-20T23:58:27.427722Z"
        }))
        .unwrap();

        assert_eq!(invite.created_at, "2024-10-30T23:58:27.427722Z");
        assert_eq!(invite.status, "pending");
    }

    #[test]
    fn test_deserialize_invite_with_created_at() {
        let invite: Invite = serde_json::from_value(serde_json::json!({
            "id": "invite_01",
            "email": "new@example.com",
            "role": "user",
            "status": "accepted",
            "created_at": "2024-10-30T23:58:27.427722Z",
            "expires_at": "2024-11-20T23:58:27.427722Z"
        }))
        .unwrap();

        assert_eq!(invite.created_at, "2024-10-30T23:58:27.427722Z");
    }

    #[test]
    fn test_populate_fills_server_fields() {
        let invite: Invite = serde_json::from_value(serde_json::json!({
            "id": "invite_01",
            "email": "new@example.com",
            "role": "admin",
            "status": "pending",
            "invited_at": "2024-10-30T23:58:27.427722Z",
            "expires_at": "2024-11-20T23:58:27.427722Z"
        }))
        .unwrap();

        let mut model = OrganizationInviteModel {
            email: "new@example.com".to_string(),
            role: "admin".to_string(),
            ..Default::default()
        };
        model.populate_from(invite).unwrap();

        assert_eq!(model.id.as_deref(), Some("invite_01"));
        assert_eq!(model.status.as_deref(), Some("pending"));
        assert_eq!(model.expires_at.as_deref(), Some("2024-11-20T23:58:27.427722Z"));
    }
}
