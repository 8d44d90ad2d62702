use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use usermgmt_core::{CreateUserRequest, User, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user store lock poisoned")]
    Poisoned,

    #[error("no identifier left after {0}")]
    IdSpaceExhausted(UserId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Identifier-to-record storage.
pub trait UserStore: Send + Sync {
    /// Snapshot of every record, ordered by id.
    fn list(&self) -> StoreResult<Vec<User>>;
    fn get(&self, id: UserId) -> StoreResult<Option<User>>;
    /// Store a new record under `max(existing ids) + 1` (or 1 when empty).
    fn insert(&self, request: CreateUserRequest) -> StoreResult<User>;
    /// Overwrite every field of `id` except the identifier. `None` if absent.
    fn replace(&self, id: UserId, user: User) -> StoreResult<Option<User>>;
    /// `false` if `id` was absent.
    fn remove(&self, id: UserId) -> StoreResult<bool>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list(&self) -> StoreResult<Vec<User>> {
        (**self).list()
    }

    fn get(&self, id: UserId) -> StoreResult<Option<User>> {
        (**self).get(id)
    }

    fn insert(&self, request: CreateUserRequest) -> StoreResult<User> {
        (**self).insert(request)
    }

    fn replace(&self, id: UserId, user: User) -> StoreResult<Option<User>> {
        (**self).replace(id, user)
    }

    fn remove(&self, id: UserId) -> StoreResult<bool> {
        (**self).remove(id)
    }
}

/// Next identifier for a store holding `ids`.
///
/// Recomputed from the current contents on every call, so removing the
/// highest id makes it available again. Returns `None` once `i32::MAX` is in
/// use.
pub fn next_id<I>(ids: I) -> Option<UserId>
where
    I: IntoIterator<Item = UserId>,
{
    match ids.into_iter().max() {
        Some(max) => max.successor(),
        None => Some(UserId::FIRST),
    }
}

/// The two records a fresh instance starts with.
pub fn reference_users() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "Alice", "Smith", "alice@techhive.com"),
        User::new(UserId::new(2), "Bob", "Johnson", "bob@techhive.com"),
    ]
}

/// In-memory store for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    /// Store pre-populated with [`reference_users`].
    pub fn seeded() -> Self {
        Self::with_users(reference_users())
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> StoreResult<Vec<User>> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut users: Vec<User> = map.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    fn get(&self, id: UserId) -> StoreResult<Option<User>> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn insert(&self, request: CreateUserRequest) -> StoreResult<User> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = next_id(map.keys().copied()).ok_or_else(|| {
            StoreError::IdSpaceExhausted(map.keys().copied().max().unwrap_or_default())
        })?;

        let user = User::from_request(id, request);
        map.insert(id, user.clone());
        tracing::debug!(user_id = %id, "user inserted");
        Ok(user)
    }

    fn replace(&self, id: UserId, mut user: User) -> StoreResult<Option<User>> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(slot) = map.get_mut(&id) else {
            return Ok(None);
        };

        user.id = id;
        *slot = user.clone();
        Ok(Some(user))
    }

    fn remove(&self, id: UserId) -> StoreResult<bool> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.remove(&id).is_some())
    }
}
