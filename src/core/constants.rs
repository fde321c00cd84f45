//! Constants used throughout stackform.
//!
//! Centralizes magic strings and configuration values.

/// Application directory name under the user config/data directories.
pub const APP_DIR: &str = "stackform";

/// Preferences file name (under the config directory).
pub const PREFS_FILE: &str = "preferences.toml";

/// Directory holding pending apply payloads (under the data directory).
pub const PENDING_DIR: &str = "pending";

/// Environment override for the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "STACKFORM_CONFIG_DIR";

/// Environment override for the data directory (used by tests).
pub const DATA_DIR_ENV: &str = "STACKFORM_DATA_DIR";

/// Environment variable naming the generator server base URL.
pub const SERVER_ENV: &str = "STACKFORM_SERVER";

/// Default generator server base URL.
pub const DEFAULT_SERVER: &str = "http://localhost:8085";

/// Query parameter carrying an apply token between invocations.
pub const APPLIED_QUERY_PARAM: &str = "applied";

/// Key identifier prefix for generated keyed-HMAC credential sets.
pub const HMAC_KEY_ID_PREFIX: &str = "stackform";

/// Compose file name written per generated mode.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";
