//! Application state management

use std::sync::Arc;

use crate::{
    config::Config,
    error::Result,
    store::{MemoryStore, RecordStore},
};

/// Application state shared across handlers
///
/// Cloning is cheap: both the configuration and the store sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Create state around an already loaded store
    pub fn new(config: Config, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Load the dataset named in the configuration into memory
    pub fn load(config: Config) -> Result<Self> {
        let store = MemoryStore::load_xml(&config.search.dataset_path)?;
        Ok(Self::new(config, Arc::new(store)))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the record store
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Token requests must present, if any
    pub fn access_token(&self) -> Option<&str> {
        self.config.search.access_token.as_deref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service", &self.config.service.name)
            .finish_non_exhaustive()
    }
}
