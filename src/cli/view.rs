//! Rendering of view-model state to the terminal.
//!
//! The view-model types (form, bridge, responses) carry no I/O; this
//! module is the thin adapter that turns their state into terminal
//! output, so the rendering surface can be swapped without touching
//! the round-trip logic.

use crate::cli::output;
use crate::core::api::GenerateResponse;
use crate::core::bridge::ParseOutcome;
use crate::core::i18n::{text, Lang, Msg};
use crate::error::Error;

/// Render a parse outcome: service list plus the env value table.
pub fn render_parse(lang: Lang, outcome: &ParseOutcome) {
    if outcome.is_empty() {
        output::dimmed(text(lang, Msg::ParseEmpty));
        return;
    }

    if !outcome.services.is_empty() {
        output::section(text(lang, Msg::ServicesHeading));
        for service in &outcome.services {
            output::list_item(service);
        }
    }

    if !outcome.rows.is_empty() {
        output::section(text(lang, Msg::EnvVarsHeading));
        let name = text(lang, Msg::ColName);
        let parsed = text(lang, Msg::ColParsed);
        let editable = text(lang, Msg::ColEditable);

        let width = outcome
            .rows
            .iter()
            .map(|r| r.key.len())
            .chain([name.len()])
            .max()
            .unwrap_or(0);

        output::dimmed(&format!(
            "  {:<width$}  {}  /  {}",
            name,
            parsed,
            editable,
            width = width
        ));
        for row in &outcome.rows {
            // Pad before tinting; escape codes would break the column width
            let padded = format!("{:<width$}", row.key, width = width);
            if row.edited == row.parsed {
                println!("  {}  {}", output::key(&padded), row.parsed);
            } else {
                println!(
                    "  {}  {}  →  {}",
                    output::key(&padded),
                    row.parsed,
                    row.edited
                );
            }
        }
    }
}

/// Render written artifacts and optionally their contents.
pub fn render_artifacts(lang: Lang, paths: &[std::path::PathBuf], preview: Option<&GenerateResponse>) {
    output::success(text(lang, Msg::ArtifactsWritten));
    for path in paths {
        output::list_item(&output::path(&path.display().to_string()));
    }

    if let Some(response) = preview {
        output::section(text(lang, Msg::PreviewHeading));
        for (mode, yaml) in &response.composes {
            output::dimmed(&format!("# {}/docker-compose.yml", mode));
            println!("{}", yaml);
        }
        output::dimmed("# .env");
        println!("{}", response.env);
    }
}

/// Turn an error into the line shown to the user.
///
/// Validation errors get the translated flow message; network errors
/// get the translated failure prefix plus the raw error; backend error
/// lists are shown verbatim.
pub fn render_error(lang: Lang, err: &Error) -> String {
    match err {
        Error::NoModeSelected => text(lang, Msg::NeedMode).to_string(),
        Error::ComposeRequired => text(lang, Msg::ComposeRequired).to_string(),
        Error::ApplyRejected => text(lang, Msg::ApplyFailed).to_string(),
        Error::Backend(_) => err.to_string(),
        e if e.is_network() => format!("{}: {}", text(lang, Msg::RequestFailed), e),
        e => e.to_string(),
    }
}
