//! In-memory handoff store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{AppliedPayload, HandoffStore};
use crate::error::Result;

/// In-memory handoff store.
#[derive(Debug, Default)]
pub struct Memory {
    entries: Mutex<HashMap<String, AppliedPayload>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending payloads.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HandoffStore for Memory {
    fn put(&self, payload: &AppliedPayload) -> Result<String> {
        let token = super::new_token();
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), payload.clone());
        Ok(token)
    }

    fn take_once(&self, token: &str) -> Result<Option<AppliedPayload>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token))
    }
}
