//! Durable user preferences.
//!
//! Stores the display language and an optional default server URL in
//! a TOML file under the user config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::i18n::Lang;
use crate::error::{Error, Result};

/// Preferences stored in `preferences.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Display language for flow messages.
    #[serde(default)]
    pub lang: Lang,
    /// Default generator server base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl Preferences {
    /// Config directory, honouring the `STACKFORM_CONFIG_DIR` override.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(constants::CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        Ok(dirs::config_dir()
            .ok_or_else(|| Error::Config("unable to determine config directory".to_string()))?
            .join(constants::APP_DIR))
    }

    /// Load preferences from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load preferences from a specific directory.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(constants::PREFS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading preferences");
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save preferences to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_dir()?)
    }

    /// Save preferences to a specific directory.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(constants::PREFS_FILE);
        debug!(path = %path.display(), "saving preferences");
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve the server base URL: explicit flag, then the stored
    /// preference, then the built-in default.
    pub fn server_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.server.clone())
            .unwrap_or_else(|| constants::DEFAULT_SERVER.to_string())
    }
}
