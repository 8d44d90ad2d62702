//! Service wiring: which store backs the handlers.

use std::sync::Arc;

use usermgmt_infra::{InMemoryUserStore, UserStore};

#[derive(Clone)]
pub struct AppServices {
    users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}

/// In-memory wiring, optionally pre-populated with the reference users.
pub fn build_services(seed_users: bool) -> AppServices {
    let store = if seed_users {
        tracing::info!("seeding reference users");
        InMemoryUserStore::seeded()
    } else {
        InMemoryUserStore::new()
    };
    AppServices::new(Arc::new(store))
}
