//! Core library components.
//!
//! This module contains the reusable client logic: the backend contract,
//! the generator form view-model, the apply round trip, and secret
//! value generation.

pub mod api;
pub mod artifacts;
pub mod bridge;
pub mod constants;
pub mod env_text;
pub mod form;
pub mod handoff;
pub mod i18n;
pub mod prefs;
pub mod rt;
pub mod secret;
