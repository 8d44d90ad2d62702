//! Field rules for creation requests.
//!
//! Validation is a pure function over [`CreateUserRequest`]; it knows nothing
//! about HTTP. Replacement bodies (PUT) are stored as-is and never pass
//! through here.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::CreateUserRequest;

pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email address.";

// Exactly one `@`, with something on both sides of it.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+$").expect("email pattern is a valid regex"));

/// Ordered, non-empty list of human-readable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Validate a creation request.
///
/// Rules run in field order (first name, last name, email) and each field
/// contributes at most one message.
pub fn validate_create(request: &CreateUserRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if is_blank(request.first_name.as_deref()) {
        errors.push(FIRST_NAME_REQUIRED.to_string());
    }
    if is_blank(request.last_name.as_deref()) {
        errors.push(LAST_NAME_REQUIRED.to_string());
    }
    match request.email.as_deref() {
        email if is_blank(email) => errors.push(EMAIL_REQUIRED.to_string()),
        Some(email) if !is_email(email) => errors.push(EMAIL_INVALID.to_string()),
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Basic address shape: a single `@` that is neither the first nor the last character.
pub fn is_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
