//! User API operations

use crate::admin::AdminClient;
use crate::config::api;
use crate::error::Result;

use super::models::User;

impl AdminClient {
    /// List all users in the organization (with pagination)
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let path = format!("/{}", api::USERS);
        self.fetch_all_pages(&path, "users").await
    }

    /// Get a user by ID; 404 is an error
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let path = format!("/{}/{}", api::USERS, urlencoding::encode(user_id));
        self.get_resource(&path, &format!("read user '{}'", user_id))
            .await
    }
}
