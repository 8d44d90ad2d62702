use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::{TokenClaims, TokenError};

/// Decides whether a presented bearer token is accepted.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError>;

    /// Short name for startup logs.
    fn mode(&self) -> &'static str;
}

/// **INSECURE.** Accepts any token that parses as `header.payload.signature`.
///
/// The header must be base64url JSON naming a known JWS algorithm and the
/// payload must be a base64url JSON object. The signature, issuer, audience
/// and expiry are never checked, so anyone can mint an accepted token. Use
/// [`Hs256TokenVerifier`] for anything beyond local demos.
#[derive(Debug, Clone)]
pub struct InsecureTokenVerifier {
    validation: Validation,
}

impl InsecureTokenVerifier {
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        Self { validation }
    }
}

impl Default for InsecureTokenVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenVerifier for InsecureTokenVerifier {
    fn verify(&self, token: &str, _now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        // The key is unused once signature validation is off.
        let data = decode::<serde_json::Value>(token, &DecodingKey::from_secret(&[]), &self.validation)
            .map_err(|_| TokenError::Malformed)?;
        TokenClaims::from_payload(&data.claims)
    }

    fn mode(&self) -> &'static str {
        "insecure"
    }
}

/// Verifies HS256 signatures against a shared secret and rejects expired tokens.
#[derive(Clone)]
pub struct Hs256TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256TokenVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `verify`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }
}

impl core::fmt::Debug for Hs256TokenVerifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256TokenVerifier").finish_non_exhaustive()
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let data = decode::<serde_json::Value>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = TokenClaims::from_payload(&data.claims)?;
        claims.check_expiry(now)?;
        Ok(claims)
    }

    fn mode(&self) -> &'static str {
        "hs256"
    }
}
