//! `usermgmt-auth` — bearer token verification, decoupled from HTTP.
//!
//! The gate is a capability ([`TokenVerifier`]) so the deployment picks, by
//! name, whether tokens are merely parsed ([`InsecureTokenVerifier`]) or
//! cryptographically checked ([`Hs256TokenVerifier`]).

pub mod claims;
pub mod verifier;

pub use claims::{TokenClaims, TokenError};
pub use verifier::{Hs256TokenVerifier, InsecureTokenVerifier, TokenVerifier};
