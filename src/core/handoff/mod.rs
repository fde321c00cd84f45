//! Single-use handoff between apply and generate invocations.
//!
//! A successful apply stores its payload under a fresh random token;
//! the next generate invocation consumes the token exactly once.
//! Reading a token removes it, so replaying the same token is a no-op.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `HandoffStore` trait
//! 2. Add the implementation in a new file (e.g., `redis.rs`)
//! 3. Re-export from this module

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Payload handed from a successful apply to the generator form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedPayload {
    /// Env values accepted by the server.
    #[serde(default, rename = "envVars")]
    pub env_vars: BTreeMap<String, String>,
    /// Modes the server suggests pre-checking.
    #[serde(default, rename = "suggestedModes")]
    pub suggested_modes: Vec<String>,
}

/// Transient key-value store with delete-on-read semantics.
pub trait HandoffStore {
    /// Store a payload under a fresh random token.
    ///
    /// # Returns
    ///
    /// The token to hand to the consuming invocation.
    fn put(&self, payload: &AppliedPayload) -> Result<String>;

    /// Take a payload, consuming the token.
    ///
    /// Returns `None` for a missing, already-consumed, or corrupt
    /// entry. Never an error for a stale token: replaying a consumed
    /// token must be a silent no-op.
    fn take_once(&self, token: &str) -> Result<Option<AppliedPayload>>;
}

impl<S: HandoffStore + ?Sized> HandoffStore for &S {
    fn put(&self, payload: &AppliedPayload) -> Result<String> {
        (**self).put(payload)
    }

    fn take_once(&self, token: &str) -> Result<Option<AppliedPayload>> {
        (**self).take_once(token)
    }
}

/// Generate a fresh handoff token.
pub fn new_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Open the default cross-invocation store.
pub fn default_store() -> Result<Filesystem> {
    Filesystem::open_default()
}
