//! Parse → edit → apply round trip.
//!
//! The bridge is the view-model for importing an existing compose
//! file: it posts the raw text to the parse endpoint, holds the
//! extracted env rows while the user edits them, re-applies the edited
//! values, and hands the accepted payload to a later generate
//! invocation through a single-use token.

use tracing::debug;

use crate::core::api::{ApplyRequest, Backend, GenerateRequest, GenerateResponse, ParseRequest};
use crate::core::constants;
use crate::core::env_text;
use crate::core::form::GeneratorForm;
use crate::core::handoff::{AppliedPayload, HandoffStore};
use crate::error::{Error, Result};

/// Backend actions guarded against concurrent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Parse,
    Apply,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Generate => "generate",
            Action::Parse => "parse",
            Action::Apply => "apply",
        }
    }
}

/// At most one in-flight request per action.
///
/// The flag is taken before a request starts and released when it
/// completes, on success and on failure alike.
#[derive(Debug, Default)]
pub struct InFlight {
    generate: bool,
    parse: bool,
    apply: bool,
}

impl InFlight {
    /// Take the flag for an action.
    ///
    /// # Errors
    ///
    /// Returns `Error::RequestInFlight` if the action is already running.
    pub fn begin(&mut self, action: Action) -> Result<()> {
        let slot = self.slot(action);
        if *slot {
            return Err(Error::RequestInFlight {
                action: action.name(),
            });
        }
        *slot = true;
        Ok(())
    }

    /// Release the flag for an action.
    pub fn finish(&mut self, action: Action) {
        *self.slot(action) = false;
    }

    fn slot(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Generate => &mut self.generate,
            Action::Parse => &mut self.parse,
            Action::Apply => &mut self.apply,
        }
    }
}

/// One extracted env variable: parsed default plus the editable value.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvRow {
    pub key: String,
    pub parsed: String,
    pub edited: String,
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub services: Vec<String>,
    pub rows: Vec<EnvRow>,
}

impl ParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.rows.is_empty()
    }
}

/// Result of a successful apply.
#[derive(Debug, Clone)]
pub struct Applied {
    pub token: String,
    /// Locator a browser client would be redirected to.
    pub redirect: String,
}

/// The externally visible bridge state.
#[derive(Debug, Default)]
pub enum BridgeState {
    #[default]
    Idle,
    Parsed(ParseOutcome),
    Applied {
        token: String,
    },
}

/// View-model for the parse/edit/apply round trip.
pub struct Bridge<B, S> {
    backend: B,
    store: S,
    state: BridgeState,
    in_flight: InFlight,
}

impl<B: Backend, S: HandoffStore> Bridge<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            state: BridgeState::Idle,
            in_flight: InFlight::default(),
        }
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    /// The parse outcome, when in the Parsed state.
    pub fn outcome(&self) -> Option<&ParseOutcome> {
        match &self.state {
            BridgeState::Parsed(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Submit raw compose/env text to the parse endpoint.
    ///
    /// A response carrying server errors leaves the previous state in
    /// place. The editable column of each row starts at the parsed
    /// default.
    ///
    /// # Errors
    ///
    /// `Error::ComposeRequired` for empty compose text (no request is
    /// sent), `Error::Backend` for server-reported errors, network
    /// errors otherwise.
    pub fn parse(&mut self, compose: &str, env: &str) -> Result<ParseOutcome> {
        let compose = compose.trim();
        if compose.is_empty() {
            return Err(Error::ComposeRequired);
        }

        self.in_flight.begin(Action::Parse)?;
        let result = self.backend.parse(&ParseRequest {
            compose: compose.to_string(),
            env: env.trim().to_string(),
        });
        self.in_flight.finish(Action::Parse);

        let resp = result?;
        if !resp.errors.is_empty() {
            return Err(Error::Backend(resp.errors));
        }

        let outcome = ParseOutcome {
            services: resp.services,
            rows: resp
                .env_vars
                .into_iter()
                .map(|(key, parsed)| EnvRow {
                    key,
                    edited: parsed.clone(),
                    parsed,
                })
                .collect(),
        };
        debug!(
            services = outcome.services.len(),
            rows = outcome.rows.len(),
            "parsed compose input"
        );

        self.state = BridgeState::Parsed(outcome.clone());
        Ok(outcome)
    }

    /// Edit one extracted value.
    ///
    /// Returns false when the bridge is not in the Parsed state or the
    /// key was not extracted.
    pub fn edit(&mut self, key: &str, value: &str) -> bool {
        if let BridgeState::Parsed(outcome) = &mut self.state {
            if let Some(row) = outcome.rows.iter_mut().find(|r| r.key == key) {
                row.edited = value.to_string();
                return true;
            }
        }
        false
    }

    /// Submit the edited values to the apply endpoint.
    ///
    /// The env text sent to the server is rebuilt from the edited rows;
    /// when nothing was extracted the raw fallback text is sent
    /// instead. On success the accepted payload is stored under a
    /// fresh single-use token and the state moves to Applied; on
    /// failure the state is unchanged.
    pub fn apply(&mut self, compose: &str, fallback_env: &str) -> Result<Applied> {
        let compose = compose.trim();
        if compose.is_empty() {
            return Err(Error::ComposeRequired);
        }

        let env = match self.outcome() {
            Some(outcome) if !outcome.rows.is_empty() => env_text::build(
                outcome
                    .rows
                    .iter()
                    .map(|r| (r.key.as_str(), r.edited.as_str())),
            ),
            _ => fallback_env.trim().to_string(),
        };

        self.in_flight.begin(Action::Apply)?;
        let result = self.backend.apply(&ApplyRequest {
            compose: compose.to_string(),
            env,
        });
        self.in_flight.finish(Action::Apply);

        let resp = result?;
        if !resp.errors.is_empty() {
            return Err(Error::Backend(resp.errors));
        }
        if !resp.ok {
            return Err(Error::ApplyRejected);
        }

        let payload = AppliedPayload {
            env_vars: resp.env_vars,
            suggested_modes: resp.suggested_modes,
        };
        let token = self.store.put(&payload)?;
        debug!(%token, "stored apply payload");

        self.state = BridgeState::Applied {
            token: token.clone(),
        };
        Ok(Applied {
            redirect: redirect_url(&token),
            token,
        })
    }

    /// Consume an apply token and populate the generator form.
    ///
    /// Returns true when a payload was found and applied. A missing or
    /// already-consumed token is a silent no-op and switches nothing.
    pub fn resume(&mut self, form: &mut GeneratorForm, token: &str) -> Result<bool> {
        match self.store.take_once(token)? {
            Some(payload) => {
                form.apply_payload(&payload);
                self.state = BridgeState::Idle;
                debug!(%token, "resumed apply payload");
                Ok(true)
            }
            None => {
                debug!(%token, "no pending payload for token");
                Ok(false)
            }
        }
    }

    /// Submit the generator form.
    ///
    /// # Errors
    ///
    /// `Error::NoModeSelected` before any request is sent; network
    /// errors otherwise.
    pub fn generate(&mut self, form: &GeneratorForm) -> Result<GenerateResponse> {
        let req: GenerateRequest = form.to_request()?;

        self.in_flight.begin(Action::Generate)?;
        let result = self.backend.generate(&req);
        self.in_flight.finish(Action::Generate);
        result
    }
}

/// Locator a browser client would load to consume a token.
pub fn redirect_url(token: &str) -> String {
    format!("/?{}={}", constants::APPLIED_QUERY_PARAM, token)
}
