//! Stackform - a form-driven client for the compose generator backend.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Submit the form, write artifacts
//! │   ├── parse         # Parse an existing compose file
//! │   ├── apply         # Parse + edit + apply, issue a resume token
//! │   ├── keys          # Secret value generation grid
//! │   ├── lang          # Language preference
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── api           # Backend HTTP contract and transport
//!     ├── bridge        # Parse → edit → apply state machine
//!     ├── form          # Generator form view-model
//!     ├── handoff       # Single-use token store (fs + in-memory)
//!     ├── secret        # Random secret value generation
//!     ├── i18n          # en/zh message catalog
//!     └── prefs         # Durable user preferences
//! ```
//!
//! # Features
//!
//! - Compose/env artifact generation driven by a form view-model
//! - Round trip for existing compose files: parse, edit values, re-apply
//! - One-time handoff tokens between apply and generate invocations
//! - Client-side secret provisioning (hex, base64, base64url, keyed JSON)

pub mod cli;
pub mod core;
pub mod error;
