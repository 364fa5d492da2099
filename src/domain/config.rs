//! Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_PAGE_SIZE, DEFAULT_SEED_AMOUNT};
use crate::error::Result;
use crate::utils::config_store;

/// Persisted application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database file path; `None` uses an in-memory database
    pub db_path: Option<PathBuf>,
    /// Items shown per page
    pub page_size: usize,
    /// Number of sample records inserted on first launch
    pub seed_amount: usize,
    /// Sort the list by descending id
    pub order_descending: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            seed_amount: DEFAULT_SEED_AMOUNT,
            order_descending: false,
        }
    }
}

impl AppConfig {
    /// Load the config from the app data dir, falling back to defaults
    pub fn load() -> Self {
        match config_store::load_config(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Save the config to the app data dir
    pub fn save(&self) -> Result<()> {
        config_store::save_config(CONFIG_FILE, self)
    }
}
