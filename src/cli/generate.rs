//! Generate command - submit the form and write artifacts.

use std::path::PathBuf;

use tracing::info;

use crate::cli::{output, view};
use crate::core::api::{HttpBackend, OptionValue};
use crate::core::artifacts;
use crate::core::bridge::Bridge;
use crate::core::env_text;
use crate::core::form::GeneratorForm;
use crate::core::handoff;
use crate::core::i18n::{text, Msg};
use crate::core::prefs::Preferences;
use crate::error::{Error, Result};

pub struct Args {
    pub modes: Vec<String>,
    pub env: Vec<String>,
    pub options: Vec<String>,
    pub gen_secrets: bool,
    pub applied: Option<String>,
    pub out: PathBuf,
    pub preview: bool,
}

/// Build the form from a resumed token plus arguments, submit it, and
/// write the returned artifacts.
pub fn execute(server: &str, prefs: &Preferences, args: Args) -> Result<()> {
    let lang = prefs.lang;
    let mut form = GeneratorForm::with_catalog();

    let backend = HttpBackend::new(server)?;
    let store = handoff::default_store()?;
    let mut bridge = Bridge::new(backend, store);

    // A stale or replayed token resumes nothing
    if let Some(token) = &args.applied {
        bridge.resume(&mut form, token)?;
    }

    for mode in &args.modes {
        form.toggle_mode(mode, true);
    }
    for pair in &args.env {
        let (key, value) = env_text::parse_pair(pair)?;
        form.set_env(&key, &value);
    }
    for pair in &args.options {
        let (key, value) = parse_option(pair)?;
        form.set_option(&key, value);
    }
    if args.gen_secrets {
        form.generate_missing_secrets();
    }

    // Mode check comes before any progress or network traffic
    if form.selected_modes().is_empty() {
        return Err(Error::NoModeSelected);
    }

    output::progress(text(lang, Msg::Generating));
    let response = match bridge.generate(&form) {
        Ok(response) => {
            output::progress_done(true);
            response
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e);
        }
    };
    info!(composes = response.composes.len(), "generated artifacts");

    let written = artifacts::write_all(&args.out, &response)?;
    view::render_artifacts(lang, &written, args.preview.then_some(&response));
    Ok(())
}

/// Parse a `name=value` option argument; "true"/"false" become booleans.
fn parse_option(pair: &str) -> Result<(String, OptionValue)> {
    let (key, value) = env_text::parse_pair(pair)?;
    let value = match value.as_str() {
        "true" => OptionValue::Bool(true),
        "false" => OptionValue::Bool(false),
        other => OptionValue::from(other),
    };
    Ok((key, value))
}
