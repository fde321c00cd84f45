//! Writing generated compose/env artifacts to disk.

use std::path::{Path, PathBuf};

use crate::core::api::GenerateResponse;
use crate::core::constants;
use crate::error::{Error, Result};

/// Write every generated artifact under `out_dir`.
///
/// Each mode's compose text lands in `<out_dir>/<mode>/docker-compose.yml`
/// and the env text in `<out_dir>/.env`.
///
/// # Returns
///
/// The written paths, composes first.
///
/// # Errors
///
/// Returns `Error::InvalidMode` for mode names that cannot be used as
/// a directory name, or an io error on write failure.
pub fn write_all(out_dir: &Path, response: &GenerateResponse) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (mode, yaml) in &response.composes {
        validate_mode_name(mode)?;
        let dir = out_dir.join(mode);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(constants::COMPOSE_FILE);
        std::fs::write(&path, yaml)?;
        written.push(path);
    }

    std::fs::create_dir_all(out_dir)?;
    let env_path = out_dir.join(constants::ENV_FILE);
    std::fs::write(&env_path, &response.env)?;
    written.push(env_path);

    Ok(written)
}

/// Mode names become directory names; reject anything path-like.
fn validate_mode_name(mode: &str) -> Result<()> {
    let ok = !mode.is_empty()
        && mode != "."
        && mode != ".."
        && mode
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidMode(mode.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn response() -> GenerateResponse {
        GenerateResponse {
            composes: BTreeMap::from([
                ("standalone".to_string(), "services: {}\n".to_string()),
                ("cluster".to_string(), "services:\n  app: {}\n".to_string()),
            ]),
            env: "FOO=bar\n".to_string(),
        }
    }

    #[test]
    fn test_write_all_layout() {
        let tmp = TempDir::new().unwrap();
        let written = write_all(tmp.path(), &response()).unwrap();

        assert_eq!(written.len(), 3);
        let standalone = tmp.path().join("standalone/docker-compose.yml");
        assert_eq!(
            std::fs::read_to_string(standalone).unwrap(),
            "services: {}\n"
        );
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(".env")).unwrap(),
            "FOO=bar\n"
        );
    }

    #[test]
    fn test_path_like_mode_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut resp = response();
        resp.composes
            .insert("../escape".to_string(), String::new());

        assert!(matches!(
            write_all(tmp.path(), &resp),
            Err(Error::InvalidMode(_))
        ));
    }
}
