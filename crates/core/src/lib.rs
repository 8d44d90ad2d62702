//! `usermgmt-core` — user domain types and creation-request validation.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage).

pub mod error;
pub mod id;
pub mod user;
pub mod validation;

pub use error::DomainError;
pub use id::UserId;
pub use user::{CreateUserRequest, User};
pub use validation::{ValidationErrors, validate_create};
