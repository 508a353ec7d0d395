use std::{fmt, sync::Arc};

use smartcast_config::Config;
use smartcast_core::Catalog;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("videos", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
