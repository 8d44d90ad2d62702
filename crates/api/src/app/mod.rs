//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use usermgmt_auth::TokenVerifier;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router from explicit parts (tests use this directly).
pub fn build_app(verifier: Arc<dyn TokenVerifier>, services: services::AppServices) -> Router {
    tracing::info!(auth_mode = verifier.mode(), "building router");
    let auth_state = middleware::AuthState { verifier };

    // Protected routes: require a bearer token.
    let protected = routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(axum::middleware::from_fn(middleware::catch_panic)),
        )
}

/// Build the router the binary serves.
pub fn build_app_from_config(config: &ApiConfig) -> Router {
    build_app(
        config.auth.verifier(),
        services::build_services(config.seed_users),
    )
}
