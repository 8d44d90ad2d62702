//! `usermgmt-infra` — storage adapters for user records.

pub mod user_store;

pub use user_store::{InMemoryUserStore, StoreError, UserStore, next_id, reference_users};
