//! Apply command - parse, edit and re-apply, issuing a resume token.

use std::path::Path;

use crate::cli::{output, view};
use crate::core::api::{Backend, HttpBackend};
use crate::core::bridge::Bridge;
use crate::core::env_text;
use crate::core::handoff::{self, HandoffStore};
use crate::core::i18n::{text, Lang, Msg};
use crate::core::prefs::Preferences;
use crate::error::{Error, Result};

pub fn execute(
    server: &str,
    prefs: &Preferences,
    compose_path: &Path,
    env_path: Option<&Path>,
    sets: &[String],
    edit: bool,
) -> Result<()> {
    let lang = prefs.lang;
    let compose = std::fs::read_to_string(compose_path)?;
    let env = match env_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    let backend = HttpBackend::new(server)?;
    let store = handoff::default_store()?;
    let mut bridge = Bridge::new(backend, store);

    output::progress(text(lang, Msg::Parsing));
    if let Err(e) = bridge.parse(&compose, &env) {
        output::progress_done(false);
        return Err(e);
    }
    output::progress_done(true);

    for pair in sets {
        let (key, value) = env_text::parse_pair(pair)?;
        if !bridge.edit(&key, &value) {
            output::warn(&format!("no parsed value named {}", key));
        }
    }

    if edit {
        prompt_rows(&mut bridge)?;
    }

    if let Some(outcome) = bridge.outcome() {
        view::render_parse(lang, outcome);
    }

    output::progress(text(lang, Msg::Applying));
    let applied = match bridge.apply(&compose, &env) {
        Ok(applied) => {
            output::progress_done(true);
            applied
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e);
        }
    };

    render_applied(lang, &applied.token, &applied.redirect);
    Ok(())
}

/// Walk the parsed rows, prompting for each editable value.
fn prompt_rows<B: Backend, S: HandoffStore>(bridge: &mut Bridge<B, S>) -> Result<()> {
    let rows: Vec<(String, String)> = bridge
        .outcome()
        .map(|o| {
            o.rows
                .iter()
                .map(|r| (r.key.clone(), r.edited.clone()))
                .collect()
        })
        .unwrap_or_default();

    for (key, current) in rows {
        let value: String = dialoguer::Input::new()
            .with_prompt(key.clone())
            .default(current)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))?;
        bridge.edit(&key, &value);
    }
    Ok(())
}

fn render_applied(lang: Lang, token: &str, redirect: &str) {
    output::success(text(lang, Msg::TokenIssued));
    output::kv("token", token);
    output::kv("location", redirect);
    output::hint(&format!("{} {}", text(lang, Msg::ResumeHint), token));
}
