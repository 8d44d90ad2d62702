use serde::Deserialize;

use usermgmt_core::{User, UserId};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `PUT /users/{id}`: a full record, stored without validation.
///
/// Any `id` in the body is ignored; the path decides.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ReplaceUserRequest {
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email.unwrap_or_default(),
        }
    }
}
