use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use usermgmt_core::{CreateUserRequest, DomainError, UserId, validate_create};

use crate::app::dto::ReplaceUserRequest;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(replace_user).delete(delete_user),
        )
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Response, ApiError> {
    let users = services.users().list()?;
    Ok((StatusCode::OK, Json(users)).into_response())
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let user = services.users().get(id)?.ok_or_else(DomainError::not_found)?;
    Ok((StatusCode::OK, Json(user)).into_response())
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body.map_err(reject_body)?;
    validate_create(&request)?;

    let user = services.users().insert(request)?;
    tracing::info!(user_id = %user.id, subject = principal.subject(), "user created");

    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)).into_response())
}

/// Full replacement. The body is stored as sent: no field rules apply here.
pub async fn replace_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    body: Result<Json<ReplaceUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(reject_body)?;

    let user = services
        .users()
        .replace(id, body.into_user(id))?
        .ok_or_else(DomainError::not_found)?;

    tracing::info!(user_id = %id, subject = principal.subject(), "user replaced");
    Ok((StatusCode::OK, Json(user)).into_response())
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    if !services.users().remove(id)? {
        return Err(DomainError::not_found().into());
    }

    tracing::info!(user_id = %id, subject = principal.subject(), "user deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    Ok(raw.parse::<UserId>()?)
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!("unreadable user body: {rejection}");
    match rejection {
        JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType,
        _ => ApiError::MissingBody,
    }
}
