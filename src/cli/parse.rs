//! Parse command - show services and env vars of an existing compose file.

use std::path::Path;

use crate::cli::{output, view};
use crate::core::api::HttpBackend;
use crate::core::bridge::Bridge;
use crate::core::handoff::Memory;
use crate::core::i18n::{text, Msg};
use crate::core::prefs::Preferences;
use crate::error::Result;

pub fn execute(
    server: &str,
    prefs: &Preferences,
    compose_path: &Path,
    env_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let lang = prefs.lang;
    let compose = std::fs::read_to_string(compose_path)?;
    let env = match env_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    // Nothing is handed off by a plain parse
    let backend = HttpBackend::new(server)?;
    let mut bridge = Bridge::new(backend, Memory::new());

    if json {
        let outcome = bridge.parse(&compose, &env)?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    output::progress(text(lang, Msg::Parsing));
    match bridge.parse(&compose, &env) {
        Ok(outcome) => {
            output::progress_done(true);
            view::render_parse(lang, &outcome);
            Ok(())
        }
        Err(e) => {
            output::progress_done(false);
            Err(e)
        }
    }
}
