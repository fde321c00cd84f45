//! Command-line interface.

pub mod apply;
pub mod completions;
pub mod generate;
pub mod keys;
pub mod lang;
pub mod output;
pub mod parse;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::prefs::Preferences;

/// Stackform - form-driven client for the compose generator backend.
#[derive(Parser)]
#[command(
    name = "stackform",
    about = "Generate, parse and re-apply compose deployments",
    version
)]
pub struct Cli {
    /// Generator server base URL
    #[arg(long, global = true, env = "STACKFORM_SERVER")]
    pub server: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate compose and env artifacts from form selections
    Generate {
        /// Deployment mode to include (repeatable)
        #[arg(short, long = "mode")]
        modes: Vec<String>,

        /// Environment override as KEY=VALUE (repeatable)
        #[arg(short, long = "env")]
        env: Vec<String>,

        /// Form option as name=value (repeatable; true/false become booleans)
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,

        /// Generate fresh values for empty secret-bearing fields
        #[arg(long)]
        gen_secrets: bool,

        /// Consume a one-time token issued by `stackform apply`
        #[arg(long, value_name = "TOKEN")]
        applied: Option<String>,

        /// Output directory for artifacts
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Print every artifact after writing it
        #[arg(long)]
        preview: bool,
    },

    /// Parse an existing compose file and show extracted services and env vars
    Parse {
        /// Path to a compose file
        compose: PathBuf,

        /// Path to a .env file with current values
        #[arg(long)]
        env: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-apply an existing compose file, issuing a one-time resume token
    Apply {
        /// Path to a compose file
        compose: PathBuf,

        /// Path to a .env file with current values
        #[arg(long)]
        env: Option<PathBuf>,

        /// Override a parsed value as KEY=VALUE (repeatable)
        #[arg(short, long = "set")]
        set: Vec<String>,

        /// Edit parsed values interactively
        #[arg(long)]
        edit: bool,
    },

    /// Generate secret values for the form's secret-bearing fields
    Keys {
        /// Specific fields (default: all)
        fields: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set the preferred language
    Lang {
        /// Language code (en, zh)
        lang: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, server: Option<String>) -> crate::error::Result<()> {
    use Command::*;

    let prefs = Preferences::load()?;
    let server = prefs.server_url(server.as_deref());

    match command {
        Generate {
            modes,
            env,
            options,
            gen_secrets,
            applied,
            out,
            preview,
        } => generate::execute(
            &server,
            &prefs,
            generate::Args {
                modes,
                env,
                options,
                gen_secrets,
                applied,
                out,
                preview,
            },
        ),
        Parse { compose, env, json } => parse::execute(&server, &prefs, &compose, env.as_deref(), json),
        Apply {
            compose,
            env,
            set,
            edit,
        } => apply::execute(&server, &prefs, &compose, env.as_deref(), &set, edit),
        Keys { fields, json } => keys::execute(&fields, json),
        Lang { lang } => lang::execute(lang.as_deref()),
        Completions { shell } => completions::execute(shell),
    }
}
