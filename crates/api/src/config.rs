//! Process configuration, read from the environment once at startup.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;

use usermgmt_auth::{Hs256TokenVerifier, InsecureTokenVerifier, TokenVerifier};
use usermgmt_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// How bearer tokens are checked.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Parse only; signatures are not verified. Insecure.
    Insecure,
    /// HS256 signature and expiry verification with a shared secret.
    Hs256 { secret: String },
}

impl core::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Insecure => f.write_str("Insecure"),
            Self::Hs256 { .. } => f.write_str("Hs256 { secret: <redacted> }"),
        }
    }
}

impl AuthMode {
    pub fn verifier(&self) -> Arc<dyn TokenVerifier> {
        match self {
            Self::Insecure => {
                tracing::warn!(
                    "AUTH_MODE=insecure: bearer token signatures are NOT verified; any well-formed token is accepted"
                );
                Arc::new(InsecureTokenVerifier::new())
            }
            Self::Hs256 { secret } => Arc::new(Hs256TokenVerifier::new(secret.as_bytes())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub auth: AuthMode,
    pub seed_users: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("JWT_SECRET must be set when AUTH_MODE=hs256")]
    MissingSecret,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let auth = match lookup("AUTH_MODE").as_deref().map(str::trim) {
            None | Some("") => AuthMode::Insecure,
            Some(m) if m.eq_ignore_ascii_case("insecure") => AuthMode::Insecure,
            Some(m) if m.eq_ignore_ascii_case("hs256") => {
                let secret = lookup("JWT_SECRET")
                    .filter(|s| !s.is_empty())
                    .ok_or(ConfigError::MissingSecret)?;
                AuthMode::Hs256 { secret }
            }
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "AUTH_MODE",
                    value: other.to_string(),
                });
            }
        };

        let seed_users = match lookup("SEED_USERS") {
            None => true,
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                var: "SEED_USERS",
                value: v,
            })?,
        };

        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(v) => LogFormat::parse(&v).ok_or(ConfigError::Invalid {
                var: "LOG_FORMAT",
                value: v,
            })?,
        };

        Ok(Self {
            bind_addr,
            auth,
            seed_users,
            log_format,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
