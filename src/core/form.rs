//! Generator form view-model.
//!
//! Holds the mode toggles, option map and env fields that make up one
//! generate submission. The form owns no I/O; the CLI layer renders it
//! and feeds argument values in, and `to_request` snapshots it into a
//! wire request. Built fresh per submit, never persisted.

use std::collections::BTreeMap;

use crate::core::api::{FormOptions, GenerateRequest, OptionValue};
use crate::core::handoff::AppliedPayload;
use crate::core::secret;
use crate::error::{Error, Result};

/// Option name for the named-volume toggle.
pub const OPT_USE_NAMED_VOLUME: &str = "useNamedVolume";
/// Option name for the proxy network.
pub const OPT_PROXY_NETWORK_NAME: &str = "proxyNetworkName";
/// Option names for the bind-mount data paths.
pub const OPT_AUTH_REDIS_DATA_PATH: &str = "authRedisDataPath";
pub const OPT_GATEWAY_REDIS_DATA_PATH: &str = "gatewayRedisDataPath";

const DEFAULT_PROXY_NETWORK: &str = "proxy";
const DEFAULT_AUTH_REDIS_DATA_PATH: &str = "./data/auth-redis";
const DEFAULT_GATEWAY_REDIS_DATA_PATH: &str = "./data/gateway-redis";

/// Boolean env fields rendered as checkboxes in the form.
const FLAG_FIELDS: &[&str] = &["AUTH_TOTP_ENABLED", "GATEWAY_ACCESS_LOG"];

/// How an env field is rendered and submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; contributes an override only when non-empty.
    Text,
    /// Checkbox; always contributes "true"/"false".
    Flag,
}

/// One env field of the generator form.
#[derive(Debug, Clone)]
pub struct EnvField {
    pub key: String,
    pub kind: FieldKind,
    pub value: String,
}

impl EnvField {
    /// Checkbox state for flag fields.
    pub fn checked(&self) -> bool {
        truthy(&self.value)
    }
}

/// One deployment mode checkbox.
#[derive(Debug, Clone)]
pub struct ModeToggle {
    pub name: String,
    pub checked: bool,
}

/// The generator form state.
#[derive(Debug, Default)]
pub struct GeneratorForm {
    pub modes: Vec<ModeToggle>,
    options: BTreeMap<String, OptionValue>,
    fields: Vec<EnvField>,
}

impl GeneratorForm {
    /// Empty form with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded with the built-in field catalog: every
    /// secret-bearing field plus the boolean feature toggles.
    pub fn with_catalog() -> Self {
        let mut form = Self::new();
        for def in secret::DEFINITIONS {
            form.fields.push(EnvField {
                key: def.field.to_string(),
                kind: FieldKind::Text,
                value: String::new(),
            });
        }
        for key in FLAG_FIELDS {
            form.fields.push(EnvField {
                key: (*key).to_string(),
                kind: FieldKind::Flag,
                value: "false".to_string(),
            });
        }
        form
    }

    /// Set a mode checkbox, adding the mode if the form does not have it.
    pub fn toggle_mode(&mut self, name: &str, on: bool) {
        match self.modes.iter_mut().find(|m| m.name == name) {
            Some(mode) => mode.checked = on,
            None => self.modes.push(ModeToggle {
                name: name.to_string(),
                checked: on,
            }),
        }
    }

    /// Names of the checked modes, in form order.
    pub fn selected_modes(&self) -> Vec<String> {
        self.modes
            .iter()
            .filter(|m| m.checked)
            .map(|m| m.name.clone())
            .collect()
    }

    /// Set a named option.
    pub fn set_option(&mut self, key: &str, value: OptionValue) {
        self.options.insert(key.to_string(), value);
    }

    /// Set an env field value, adding a text field for unknown keys.
    ///
    /// Flag fields coerce the value to "true"/"false".
    pub fn set_env(&mut self, key: &str, value: &str) {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = match field.kind {
                    FieldKind::Text => value.to_string(),
                    FieldKind::Flag => truthy(value).to_string(),
                };
            }
            None => self.fields.push(EnvField {
                key: key.to_string(),
                kind: FieldKind::Text,
                value: value.to_string(),
            }),
        }
    }

    pub fn field(&self, key: &str) -> Option<&EnvField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn fields(&self) -> &[EnvField] {
        &self.fields
    }

    /// Populate the form from a consumed apply payload.
    ///
    /// Mode checkboxes are set to exactly the suggested set (unknown
    /// suggestions are added, everything else is unchecked). Flag
    /// fields are checked for "true"/"1" values; text fields take the
    /// value verbatim.
    pub fn apply_payload(&mut self, payload: &AppliedPayload) {
        for mode in &mut self.modes {
            mode.checked = payload.suggested_modes.contains(&mode.name);
        }
        for suggested in &payload.suggested_modes {
            if !self.modes.iter().any(|m| &m.name == suggested) {
                self.modes.push(ModeToggle {
                    name: suggested.clone(),
                    checked: true,
                });
            }
        }

        for (key, value) in &payload.env_vars {
            self.set_env(key, value);
        }
    }

    /// Fill any empty secret-bearing field with a freshly generated value.
    pub fn generate_missing_secrets(&mut self) {
        for def in secret::DEFINITIONS {
            let missing = self
                .field(def.field)
                .map(|f| f.value.trim().is_empty())
                .unwrap_or(true);
            if missing {
                let value = secret::generate(def.kind);
                self.set_env(def.field, &value);
            }
        }
    }

    /// Snapshot the form into a generate request.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoModeSelected` when no mode is checked; no
    /// request must be sent in that case.
    pub fn to_request(&self) -> Result<GenerateRequest> {
        let modes = self.selected_modes();
        if modes.is_empty() {
            return Err(Error::NoModeSelected);
        }

        let mut options = FormOptions {
            values: self.options.clone(),
            env_overrides: BTreeMap::new(),
        };
        normalize_options(&mut options.values);

        for field in &self.fields {
            match field.kind {
                FieldKind::Flag => {
                    options
                        .env_overrides
                        .insert(field.key.clone(), field.checked().to_string());
                }
                FieldKind::Text => {
                    let value = field.value.trim();
                    if !value.is_empty() {
                        options
                            .env_overrides
                            .insert(field.key.clone(), value.to_string());
                    }
                }
            }
        }

        Ok(GenerateRequest { modes, options })
    }
}

/// Apply the storage/network option defaults the backend expects.
///
/// Named-volume storage clears the bind-mount paths; path storage
/// defaults them. A blank proxy network name falls back to the default.
fn normalize_options(values: &mut BTreeMap<String, OptionValue>) {
    let use_named_volume = matches!(
        values.get(OPT_USE_NAMED_VOLUME),
        Some(OptionValue::Bool(true))
    );

    let network_blank = match values.get(OPT_PROXY_NETWORK_NAME) {
        Some(OptionValue::Text(name)) => name.trim().is_empty(),
        Some(OptionValue::Bool(_)) | None => true,
    };
    if network_blank {
        values.insert(
            OPT_PROXY_NETWORK_NAME.to_string(),
            OptionValue::from(DEFAULT_PROXY_NETWORK),
        );
    }

    let path_defaults = [
        (OPT_AUTH_REDIS_DATA_PATH, DEFAULT_AUTH_REDIS_DATA_PATH),
        (OPT_GATEWAY_REDIS_DATA_PATH, DEFAULT_GATEWAY_REDIS_DATA_PATH),
    ];
    for (key, default) in path_defaults {
        if use_named_volume {
            values.insert(key.to_string(), OptionValue::from(""));
        } else {
            let blank = match values.get(key) {
                Some(OptionValue::Text(path)) => path.trim().is_empty(),
                Some(OptionValue::Bool(_)) | None => true,
            };
            if blank {
                values.insert(key.to_string(), OptionValue::from(default));
            }
        }
    }
}

/// Checkbox truthiness for env values.
pub fn truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
