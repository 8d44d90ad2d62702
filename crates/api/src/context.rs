use usermgmt_auth::TokenClaims;

/// Principal context for a request (whoever presented the bearer token).
///
/// Tokens without a string `sub` claim are logged as `"anonymous"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrincipalContext {
    subject: Option<String>,
}

impl PrincipalContext {
    pub fn new(subject: Option<String>) -> Self {
        Self { subject }
    }

    pub fn from_claims(claims: TokenClaims) -> Self {
        Self::new(claims.sub)
    }

    /// Token subject, or `"anonymous"` when the token had none.
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("anonymous")
    }
}
