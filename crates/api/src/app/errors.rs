use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use usermgmt_auth::TokenError;
use usermgmt_core::{DomainError, ValidationErrors};
use usermgmt_infra::StoreError;

pub const USER_NOT_FOUND: &str = "User not found.";
pub const USER_DATA_REQUIRED: &str = "User data is required.";
pub const JSON_CONTENT_TYPE_REQUIRED: &str = "Content-Type must be application/json.";
pub const INVALID_USER_ID: &str = "The user id must be an integer.";
pub const UNAUTHORIZED: &str = "Unauthorized.";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

/// Every way a request can fail, mapped to a status and JSON body in one place.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("request body missing or unreadable")]
    MissingBody,

    #[error("request body is not declared as JSON")]
    UnsupportedMediaType,

    #[error("invalid user id: {0}")]
    InvalidId(String),

    #[error("user not found")]
    NotFound,

    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for ApiError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::InvalidId(msg) => Self::InvalidId(msg),
            DomainError::NotFound => Self::NotFound,
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(value: TokenError) -> Self {
        Self::Unauthorized(match value {
            TokenError::Malformed => "malformed token",
            TokenError::InvalidSignature => "invalid signature",
            TokenError::Expired => "expired token",
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                json_errors(StatusCode::BAD_REQUEST, errors.into_messages())
            }
            ApiError::MissingBody => json_errors(StatusCode::BAD_REQUEST, [USER_DATA_REQUIRED]),
            ApiError::UnsupportedMediaType => {
                json_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, JSON_CONTENT_TYPE_REQUIRED)
            }
            ApiError::InvalidId(_) => json_errors(StatusCode::BAD_REQUEST, [INVALID_USER_ID]),
            ApiError::NotFound => json_error(StatusCode::NOT_FOUND, USER_NOT_FOUND),
            ApiError::Unauthorized(reason) => {
                tracing::debug!(reason, "request rejected by auth gate");
                json_error(StatusCode::UNAUTHORIZED, UNAUTHORIZED)
            }
            ApiError::Store(e) => {
                tracing::error!("store failure: {e}");
                internal_error()
            }
        }
    }
}

/// `{ "error": message }`
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

/// `{ "errors": [messages...] }`
pub fn json_errors<I, S>(status: StatusCode, messages: I) -> Response
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
    (status, axum::Json(json!({ "errors": messages }))).into_response()
}

pub fn internal_error() -> Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}
