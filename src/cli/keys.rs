//! Keys command - generate secret values for the form's secret fields.

use crate::cli::output;
use crate::core::secret::{self, SecretDefinition};
use crate::error::{Error, Result};

/// Generate fresh values for the requested fields (all by default).
pub fn execute(fields: &[String], json: bool) -> Result<()> {
    let defs: Vec<&SecretDefinition> = if fields.is_empty() {
        secret::DEFINITIONS.iter().collect()
    } else {
        fields
            .iter()
            .map(|field| {
                secret::definition(field).ok_or_else(|| Error::UnknownField(field.clone()))
            })
            .collect::<Result<_>>()?
    };

    if json {
        let mut obj = serde_json::Map::new();
        for def in &defs {
            obj.insert(
                def.field.to_string(),
                serde_json::Value::String(secret::generate(def.kind)),
            );
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(obj))?
        );
        return Ok(());
    }

    for def in &defs {
        println!("{}={}", output::key(def.field), secret::generate(def.kind));
        output::dimmed(&format!("  {} ({})", def.note, def.kind.name()));
    }
    Ok(())
}
