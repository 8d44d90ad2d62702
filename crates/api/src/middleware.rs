use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use futures_util::FutureExt;
use tracing::Instrument;
use uuid::Uuid;

use usermgmt_auth::TokenVerifier;

use crate::app::errors::{self, ApiError};
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Bearer gate. What counts as an acceptable token is up to the verifier.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;
    let claims = state.verifier.verify(token, Utc::now())?;

    req.extensions_mut()
        .insert(PrincipalContext::from_claims(claims));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized("missing authorization header"))?;

    let header = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("authorization header is not ascii"))?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or(ApiError::Unauthorized("authorization header has no scheme"))?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(ApiError::Unauthorized("authorization scheme is not bearer"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(ApiError::Unauthorized("empty bearer token"));
    }

    Ok(token)
}

/// One line in, one line out, inside a span carrying a fresh request id.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("request", %request_id);

    async move {
        tracing::info!("HTTP {} {}", req.method(), req.uri().path());
        let res = next.run(req).await;
        tracing::info!("Response {}", res.status().as_u16());
        res
    }
    .instrument(span)
    .await
}

/// Turn a handler panic into the generic 500 body instead of a dropped connection.
pub async fn catch_panic(req: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(res) => res,
        Err(_) => {
            tracing::error!("handler panicked");
            errors::internal_error()
        }
    }
}
