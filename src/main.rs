//! Stackform - form-driven client for the compose generator backend.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stackform::cli::{execute, output, view, Cli};
use stackform::core::prefs::Preferences;
use stackform::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("STACKFORM_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stackform=debug")
        } else {
            EnvFilter::new("stackform=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.server) {
        let lang = Preferences::load().map(|p| p.lang).unwrap_or_default();

        let suggestion = match &e {
            Error::NoModeSelected => Some("pass at least one --mode"),
            Error::Http(_) | Error::Status { .. } => {
                Some("is the generator server reachable? check --server")
            }
            Error::UnknownField(_) => Some("run: stackform keys"),
            _ => None,
        };

        output::error(&view::render_error(lang, &e));
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
