//! Application Constants
//!
//! Centralized defaults shared between the demo binary and the config layer.

/// Items shown per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Number of sample records inserted on first launch
pub const DEFAULT_SEED_AMOUNT: usize = 1000;

/// Subdirectory of the local data dir used for persisted files
pub const APP_DIR_NAME: &str = "pagelist";

/// Config file name inside the app data dir
pub const CONFIG_FILE: &str = "config.json";
