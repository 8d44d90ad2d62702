//! User record and creation request.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A stored user record.
///
/// Names are optional because full replacement (PUT) stores whatever the
/// client sends without validation. Records created through
/// [`CreateUserRequest`] always carry non-blank names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: email.into(),
        }
    }

    /// Build the record for an accepted creation request.
    pub fn from_request(id: UserId, request: CreateUserRequest) -> Self {
        Self {
            id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email.unwrap_or_default(),
        }
    }
}

/// Body of a creation request (`POST /users`).
///
/// Every field is optional on the wire so that absence is reported by the
/// validator instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }
}
