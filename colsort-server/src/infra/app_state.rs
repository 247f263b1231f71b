use std::{fmt, sync::Arc};

use colsort_core::{ConfigError, MemorySortStore, SortStateStore};

use crate::infra::config::Config;
use crate::users::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sort_store: Arc<dyn SortStateStore>,
    pub users: Arc<UserDirectory>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// State with the seeded user directory and an in-process sort store.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let sort_store = Arc::new(MemorySortStore::with_capacity(config.max_sort_sessions));
        Ok(Self::with_store(
            config,
            sort_store,
            UserDirectory::seeded()?,
        ))
    }

    pub fn with_store(
        config: Config,
        sort_store: Arc<dyn SortStateStore>,
        users: UserDirectory,
    ) -> Self {
        Self {
            config: Arc::new(config),
            sort_store,
            users: Arc::new(users),
        }
    }
}
