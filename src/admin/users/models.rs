//! User data models

use serde::{Deserialize, Serialize};

use crate::admin::traits::Populate;
use crate::error::Result;

/// User record from the Admin API
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    pub email: String,
    pub name: String,
    pub role: String,
    pub added_at: String,
}

/// Local projection of a user (all fields server-assigned)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserModel {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// RFC 3339 datetime of when the user joined the organization
    pub added_at: String,
}

impl Populate<User> for UserModel {
    fn populate_from(&mut self, user: User) -> Result<()> {
        self.id = user.id;
        self.email = user.email;
        self.name = user.name;
        self.role = user.role;
        self.added_at = user.added_at;
        Ok(())
    }
}

/// All users in the organization
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UsersDataSourceModel {
    pub users: Vec<UserModel>,
}

impl Populate<Vec<User>> for UsersDataSourceModel {
    fn populate_from(&mut self, users: Vec<User>) -> Result<()> {
        self.users.populate_from(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> serde_json::Value {
        serde_json::json!({
            "id": "user_01",
            "type": "user",
            "email": "ada@example.com",
            "name": "Ada",
            "role": "developer",
            "added_at": "2024-10-30T23:58:27.427722Z"
        })
    }

    #[test]
    fn test_deserialize_user() {
        let user: User = serde_json::from_value(user_json()).unwrap();
        assert_eq!(user.id, "user_01");
        assert_eq!(user.user_type.as_deref(), Some("user"));
        assert_eq!(user.role, "developer");
    }

    #[test]
    fn test_deserialize_user_missing_field_fails() {
        let result: std::result::Result<User, _> =
            serde_json::from_value(serde_json::json!({ "id": "user_01" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_populate_user_model() {
        let user: User = serde_json::from_value(user_json()).unwrap();
        let mut model = UserModel {
            id: "user_01".to_string(),
            ..Default::default()
        };
        model.populate_from(user).unwrap();

        assert_eq!(model.email, "ada@example.com");
        assert_eq!(model.name, "Ada");
        assert_eq!(model.added_at, "2024-10-30T23:58:27.427722Z");
    }

    #[test]
    fn test_populate_users_data_source() {
        let users: Vec<User> = vec![
            serde_json::from_value(user_json()).unwrap(),
            serde_json::from_value(user_json()).unwrap(),
        ];
        let mut data = UsersDataSourceModel::default();
        data.populate_from(users).unwrap();
        assert_eq!(data.users.len(), 2);
    }
}
