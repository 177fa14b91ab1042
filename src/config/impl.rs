use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading the configuration on first access, so callers
/// that never ran `init_config()` (tests, one-off CLI commands) still get
/// a usable value.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::load()))
        .clone()
}

/// Initialize the global configuration
///
/// Loads configuration from "config.toml" in the current directory and
/// `LINKSHELF__*` environment variables. If neither is present, uses
/// in-memory defaults.
///
/// # Examples
/// ```no_run
/// use linkshelf::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    CONFIG.get_or_init(|| Arc::new(StaticConfig::load()));
}
