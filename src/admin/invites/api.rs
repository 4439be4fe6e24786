//! Organization invite API operations

use log::debug;

use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateInviteRequest, Invite};

fn invite_path(invite_id: &str) -> String {
    format!("/{}/{}", api::INVITES, urlencoding::encode(invite_id))
}

impl AdminClient {
    /// List all invites (with pagination)
    pub async fn list_invites(&self) -> Result<Vec<Invite>> {
        self.fetch_all_pages(&format!("/{}", api::INVITES), "invites")
            .await
    }

    /// Get an invite by ID; 404 is an error
    pub async fn get_invite(&self, invite_id: &str) -> Result<Invite> {
        self.get_resource(
            &invite_path(invite_id),
            &format!("read invite '{}'", invite_id),
        )
        .await
    }

    /// Get an invite by ID, `None` if it does not exist
    pub async fn find_invite(&self, invite_id: &str) -> Result<Option<Invite>> {
        self.find_resource(
            &invite_path(invite_id),
            &format!("read invite '{}'", invite_id),
        )
        .await
    }

    /// Invite someone to the organization
    pub async fn create_invite(&self, request: &CreateInviteRequest) -> Result<Invite> {
        debug!("Inviting {} as {}", request.email, request.role);
        let builder = self.post(&format!("/{}", api::INVITES)).json(request);
        self.send_json(builder, &format!("create invite for '{}'", request.email))
            .await
    }

    /// Delete a pending invite
    pub async fn delete_invite(&self, invite_id: &str) -> Result<()> {
        debug!("Deleting invite {}", invite_id);
        self.send_expect_ok(
            self.delete(&invite_path(invite_id)),
            &format!("delete invite '{}'", invite_id),
        )
        .await
    }
}
