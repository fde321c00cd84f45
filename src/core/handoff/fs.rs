//! Filesystem-backed handoff store.
//!
//! Stores pending apply payloads as one JSON file per token under the
//! stackform data directory, so a token issued by `apply` survives
//! until the next `generate` invocation consumes it.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::{AppliedPayload, HandoffStore};
use crate::core::constants;
use crate::error::{Error, Result};

/// Filesystem-backed handoff store.
pub struct Filesystem {
    dir: PathBuf,
}

impl Filesystem {
    /// Open the store at the default data directory.
    ///
    /// Honours the `STACKFORM_DATA_DIR` override, otherwise uses the
    /// platform data directory.
    pub fn open_default() -> Result<Self> {
        let base = match std::env::var_os(constants::DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_local_dir()
                .ok_or_else(|| Error::Config("unable to determine data directory".to_string()))?
                .join(constants::APP_DIR),
        };
        Self::at(base.join(constants::PENDING_DIR))
    }

    /// Open the store at a specific directory.
    pub fn at(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn entry_path(&self, token: &str) -> PathBuf {
        self.dir.join(format!("applied-{}.json", token))
    }

    /// Tokens are uuid-shaped; anything else cannot name an entry.
    fn token_is_wellformed(token: &str) -> bool {
        !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl HandoffStore for Filesystem {
    fn put(&self, payload: &AppliedPayload) -> Result<String> {
        let token = super::new_token();
        let path = self.entry_path(&token);
        fs::write(&path, serde_json::to_string(payload)?)?;

        // Payloads may carry secrets; keep them private (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        debug!(path = %path.display(), "stored apply payload");
        Ok(token)
    }

    fn take_once(&self, token: &str) -> Result<Option<AppliedPayload>> {
        if !Self::token_is_wellformed(token) {
            return Ok(None);
        }

        let path = self.entry_path(token);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Consume before decoding: a corrupt entry is dropped, not retried
        fs::remove_file(&path)?;

        match serde_json::from_str(&contents) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) => {
                debug!(token, error = %e, "discarding corrupt apply payload");
                Ok(None)
            }
        }
    }
}
