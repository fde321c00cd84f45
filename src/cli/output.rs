//! Shared CLI output helpers.
//!
//! Green for success, red for errors, yellow for warnings, cyan for
//! hints/paths/keys, dimmed for secondary info. All helpers respect
//! NO_COLOR.

use std::fmt::Display;
use std::io::{self, Write as IoWrite};

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 56;

/// Apply a color only when color output is enabled.
fn tint(text: &str, paint: impl FnOnce(&str) -> ColoredString) -> String {
    if std::env::var("NO_COLOR").is_err() {
        paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// `✓ msg` in green.
pub fn success(msg: &str) {
    println!("{} {}", tint("✓", |s| s.green()), msg);
}

/// `✗ msg` in red, to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", tint("✗", |s| s.red()), msg);
}

/// `⚠ msg` in yellow.
pub fn warn(msg: &str) {
    println!("{} {}", tint("⚠", |s| s.yellow()), msg);
}

/// `→ msg` in cyan.
pub fn hint(msg: &str) {
    println!("{} {}", tint("→", |s| s.cyan()), tint(msg, |s| s.cyan()));
}

/// Indented label/value line, label dimmed and value bold.
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        tint(label, |s| s.dimmed()),
        tint(&value.to_string(), |s| s.bold())
    );
}

/// Bulleted list entry.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Secondary, dimmed line.
pub fn dimmed(msg: &str) {
    println!("{}", tint(msg, |s| s.dimmed()));
}

/// Bold section title followed by a horizontal rule.
pub fn section(title: &str) {
    println!();
    println!("{}", tint(title, |s| s.bold()));
    println!("{}", tint(&"─".repeat(RULE_WIDTH), |s| s.dimmed()));
}

/// Format a path for inline use.
pub fn path(p: &str) -> String {
    tint(p, |s| s.cyan())
}

/// Format a key name for inline use.
pub fn key(k: &str) -> String {
    tint(k, |s| s.cyan())
}

/// Start a `label... ` progress line; finish with [`progress_done`].
pub fn progress(label: &str) {
    print!("{}... ", tint(label, |s| s.dimmed()));
    let _ = io::stdout().flush();
}

/// Finish a progress line with an ok/failed marker.
pub fn progress_done(success: bool) {
    if success {
        println!("{}", tint("ok", |s| s.green()));
    } else {
        println!("{}", tint("failed", |s| s.red()));
    }
}
