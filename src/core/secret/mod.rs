//! Secret value generation for the generator form.
//!
//! Produces freshly-random credentials in the encodings the generated
//! stack expects: lowercase hex, standard base64, unpadded url-safe
//! base64, and a keyed-HMAC JSON credential set.

pub mod random;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::core::constants;
use random::ByteSource;

/// Byte length for hex and base64 secrets.
const KEY_BYTES: usize = 32;

/// Byte length for generated passwords.
const PASSWORD_BYTES: usize = 24;

/// Byte length of the random part of a HMAC key identifier.
const KEY_ID_BYTES: usize = 4;

/// The kind of secret value a form field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    /// 64 lowercase hex chars (32 random bytes).
    ApiKey,
    /// Same encoding as [`SecretKind::ApiKey`], kept distinct for the catalog.
    HmacSecret,
    /// JSON object with one `<prefix>-<8 hex>` key and a 64-hex-char value.
    HmacKeys,
    /// Standard base64 of 32 random bytes.
    Aes256,
    /// Url-safe base64 of 24 random bytes, no padding.
    Password,
}

impl SecretKind {
    /// Parse a kind name. Unknown names fall back to the hex default.
    pub fn parse(name: &str) -> Self {
        match name {
            "api-key" => SecretKind::ApiKey,
            "hmac-secret" => SecretKind::HmacSecret,
            "hmac-keys" => SecretKind::HmacKeys,
            "aes-256" => SecretKind::Aes256,
            "password" => SecretKind::Password,
            _ => SecretKind::ApiKey,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SecretKind::ApiKey => "api-key",
            SecretKind::HmacSecret => "hmac-secret",
            SecretKind::HmacKeys => "hmac-keys",
            SecretKind::Aes256 => "aes-256",
            SecretKind::Password => "password",
        }
    }
}

/// A secret-bearing form field and the value kind it expects.
#[derive(Debug, Clone, Copy)]
pub struct SecretDefinition {
    /// Target env field in the generator form.
    pub field: &'static str,
    pub kind: SecretKind,
    /// Short description shown in the keys listing.
    pub note: &'static str,
}

/// Secret-bearing fields of the generator form.
pub const DEFINITIONS: &[SecretDefinition] = &[
    SecretDefinition {
        field: "GATEWAY_API_KEY",
        kind: SecretKind::ApiKey,
        note: "API key for the gateway admin endpoints",
    },
    SecretDefinition {
        field: "AUTH_API_KEY",
        kind: SecretKind::ApiKey,
        note: "API key for the auth service",
    },
    SecretDefinition {
        field: "AUTH_HMAC_SECRET",
        kind: SecretKind::HmacSecret,
        note: "HMAC secret for signed callbacks",
    },
    SecretDefinition {
        field: "AUTH_HMAC_KEYS",
        kind: SecretKind::HmacKeys,
        note: "keyed HMAC credential set (JSON)",
    },
    SecretDefinition {
        field: "AUTH_TOTP_API_KEY",
        kind: SecretKind::ApiKey,
        note: "API key for the TOTP endpoints",
    },
    SecretDefinition {
        field: "AUTH_TOTP_ENCRYPTION_KEY",
        kind: SecretKind::Aes256,
        note: "AES-256 key for TOTP seed storage",
    },
    SecretDefinition {
        field: "GATEWAY_REDIS_PASSWORD",
        kind: SecretKind::Password,
        note: "password for the gateway redis",
    },
    SecretDefinition {
        field: "AUTH_REDIS_PASSWORD",
        kind: SecretKind::Password,
        note: "password for the auth redis",
    },
    SecretDefinition {
        field: "SESSION_REDIS_PASSWORD",
        kind: SecretKind::Password,
        note: "password for the session redis",
    },
];

/// Look up a secret definition by its target field name.
pub fn definition(field: &str) -> Option<&'static SecretDefinition> {
    DEFINITIONS.iter().find(|d| d.field == field)
}

/// Generate a fresh secret value from the OS random source.
pub fn generate(kind: SecretKind) -> String {
    generate_with(&mut random::System, kind)
}

/// Generate a fresh secret value from the given byte source.
pub fn generate_with(source: &mut dyn ByteSource, kind: SecretKind) -> String {
    match kind {
        SecretKind::ApiKey | SecretKind::HmacSecret => hex_bytes(source, KEY_BYTES),
        SecretKind::Aes256 => STANDARD.encode(raw_bytes(source, KEY_BYTES)),
        SecretKind::Password => URL_SAFE_NO_PAD.encode(raw_bytes(source, PASSWORD_BYTES)),
        SecretKind::HmacKeys => {
            let key_id = format!(
                "{}-{}",
                constants::HMAC_KEY_ID_PREFIX,
                hex_bytes(source, KEY_ID_BYTES)
            );
            let mut obj = serde_json::Map::new();
            obj.insert(
                key_id,
                serde_json::Value::String(hex_bytes(source, KEY_BYTES)),
            );
            serde_json::Value::Object(obj).to_string()
        }
    }
}

fn raw_bytes(source: &mut dyn ByteSource, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    source.fill(&mut buf);
    buf
}

fn hex_bytes(source: &mut dyn ByteSource, len: usize) -> String {
    hex::encode(raw_bytes(source, len))
}
