use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Claims read from an accepted token.
///
/// Only the registered claims the service looks at are kept; the rest of the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenClaims {
    /// Subject, when the payload carries a string `sub`.
    pub sub: Option<String>,

    /// Expiry (`exp`, seconds since the epoch), when present.
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// Pull the known claims out of a decoded JSON payload.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, TokenError> {
        let object = payload.as_object().ok_or(TokenError::Malformed)?;

        let sub = object.get("sub").and_then(|v| v.as_str()).map(str::to_string);
        let expires_at = match object.get("exp") {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => {
                let secs = v.as_i64().ok_or(TokenError::Malformed)?;
                Some(DateTime::from_timestamp(secs, 0).ok_or(TokenError::Malformed)?)
            }
        };

        Ok(Self { sub, expires_at })
    }

    /// Reject the claims if `exp` is at or before `now`.
    pub fn check_expiry(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        match self.expires_at {
            Some(exp) if now >= exp => Err(TokenError::Expired),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a well-formed signed token")]
    Malformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,
}
