// Application state module

use crate::register::UserStore;

use super::types::Config;

/// Shared application state
///
/// Owns the loaded configuration and the in-memory user store. Built once
/// in `main` and handed to every connection behind an `Arc`, so the store
/// is an injected dependency rather than a process global.
pub struct AppState {
    pub config: Config,
    pub users: UserStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            users: UserStore::new(),
        }
    }
}
