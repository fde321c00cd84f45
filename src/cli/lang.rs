//! Lang command - show or set the preferred language.

use crate::cli::output;
use crate::core::i18n::Lang;
use crate::core::prefs::Preferences;
use crate::error::{Error, Result};

pub fn execute(code: Option<&str>) -> Result<()> {
    let mut prefs = Preferences::load()?;

    match code {
        None => {
            output::kv("language", prefs.lang.code());
        }
        Some(code) => {
            let lang = Lang::parse(code).ok_or_else(|| {
                Error::Config(format!("unknown language: {} (expected en or zh)", code))
            })?;
            prefs.lang = lang;
            prefs.save()?;
            output::success(&format!("language set to {}", lang.code()));
        }
    }
    Ok(())
}
