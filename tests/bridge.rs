//! Round-trip tests for the parse/edit/apply bridge over a stub backend.

use std::cell::RefCell;
use std::collections::BTreeMap;

use stackform::core::api::{
    ApplyRequest, ApplyResponse, Backend, GenerateRequest, GenerateResponse, ParseRequest,
    ParseResponse,
};
use stackform::core::bridge::{Bridge, BridgeState};
use stackform::core::form::GeneratorForm;
use stackform::core::handoff::Memory;
use stackform::error::Error;

/// Backend stub with canned responses and call recording.
#[derive(Default)]
struct StubBackend {
    parse_response: ParseResponse,
    apply_response: ApplyResponse,
    parse_calls: RefCell<usize>,
    apply_calls: RefCell<usize>,
    generate_calls: RefCell<usize>,
    last_apply_env: RefCell<Option<String>>,
}

impl Backend for StubBackend {
    fn generate(&self, _req: &GenerateRequest) -> stackform::error::Result<GenerateResponse> {
        *self.generate_calls.borrow_mut() += 1;
        Ok(GenerateResponse::default())
    }

    fn parse(&self, _req: &ParseRequest) -> stackform::error::Result<ParseResponse> {
        *self.parse_calls.borrow_mut() += 1;
        Ok(self.parse_response.clone())
    }

    fn apply(&self, req: &ApplyRequest) -> stackform::error::Result<ApplyResponse> {
        *self.apply_calls.borrow_mut() += 1;
        *self.last_apply_env.borrow_mut() = Some(req.env.clone());
        Ok(self.apply_response.clone())
    }
}

const COMPOSE: &str = "services:\n  app:\n    image: x";

fn parse_response(env_vars: &[(&str, &str)]) -> ParseResponse {
    ParseResponse {
        services: vec!["app".to_string()],
        env_vars: env_vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        errors: Vec::new(),
    }
}

#[test]
fn test_parse_extracts_services_and_rows() {
    let stub = StubBackend {
        parse_response: parse_response(&[("FOO", "default")]),
        ..Default::default()
    };
    let mut bridge = Bridge::new(&stub, Memory::new());

    let outcome = bridge.parse(COMPOSE, "").unwrap();
    assert_eq!(outcome.services, vec!["app"]);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].key, "FOO");
    assert_eq!(outcome.rows[0].parsed, "default");
    assert_eq!(outcome.rows[0].edited, "default");
    assert!(matches!(bridge.state(), BridgeState::Parsed(_)));
}

#[test]
fn test_parse_empty_compose_is_local_error() {
    let stub = StubBackend::default();
    let mut bridge = Bridge::new(&stub, Memory::new());

    assert!(matches!(
        bridge.parse("   \n", ""),
        Err(Error::ComposeRequired)
    ));
    assert_eq!(*stub.parse_calls.borrow(), 0);
}

#[test]
fn test_parse_server_errors_keep_prior_state() {
    let stub = StubBackend {
        parse_response: ParseResponse {
            errors: vec!["unsupported version".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bridge = Bridge::new(&stub, Memory::new());

    match bridge.parse(COMPOSE, "") {
        Err(Error::Backend(errors)) => assert_eq!(errors, vec!["unsupported version"]),
        other => panic!("expected backend error, got {:?}", other.map(|_| ())),
    }
    assert!(matches!(bridge.state(), BridgeState::Idle));
}

#[test]
fn test_apply_roundtrip_populates_form_once() {
    let store = Memory::new();
    let stub = StubBackend {
        parse_response: parse_response(&[("FOO", "default")]),
        apply_response: ApplyResponse {
            ok: true,
            env_vars: BTreeMap::from([("FOO".to_string(), "bar".to_string())]),
            suggested_modes: vec!["standalone".to_string()],
            errors: Vec::new(),
        },
        ..Default::default()
    };

    let token = {
        let mut bridge = Bridge::new(&stub, &store);
        bridge.parse(COMPOSE, "").unwrap();
        assert!(bridge.edit("FOO", "bar"));

        let applied = bridge.apply(COMPOSE, "").unwrap();
        assert!(applied.redirect.contains("applied="));
        assert!(applied.redirect.ends_with(&applied.token));
        // The edited rows were serialised back to dotenv text
        assert_eq!(stub.last_apply_env.borrow().as_deref(), Some("FOO=bar\n"));
        applied.token
    };

    // A later invocation consumes the token and fills the form
    let mut bridge = Bridge::new(&stub, &store);
    let mut form = GeneratorForm::with_catalog();
    assert!(bridge.resume(&mut form, &token).unwrap());
    assert_eq!(form.field("FOO").unwrap().value, "bar");
    assert_eq!(form.selected_modes(), vec!["standalone"]);

    // Replaying the token is a silent no-op
    let mut replayed = GeneratorForm::with_catalog();
    assert!(!bridge.resume(&mut replayed, &token).unwrap());
    assert!(replayed.field("FOO").is_none());
}

#[test]
fn test_apply_without_rows_falls_back_to_raw_env() {
    let stub = StubBackend {
        parse_response: ParseResponse {
            services: vec!["app".to_string()],
            ..Default::default()
        },
        apply_response: ApplyResponse {
            ok: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bridge = Bridge::new(&stub, Memory::new());

    bridge.parse(COMPOSE, "").unwrap();
    bridge.apply(COMPOSE, "RAW=1\n").unwrap();
    assert_eq!(stub.last_apply_env.borrow().as_deref(), Some("RAW=1"));
}

#[test]
fn test_apply_rejection_keeps_parsed_state() {
    let store = Memory::new();
    let stub = StubBackend {
        parse_response: parse_response(&[("FOO", "default")]),
        apply_response: ApplyResponse {
            ok: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bridge = Bridge::new(&stub, &store);

    bridge.parse(COMPOSE, "").unwrap();
    assert!(matches!(
        bridge.apply(COMPOSE, ""),
        Err(Error::ApplyRejected)
    ));
    assert!(matches!(bridge.state(), BridgeState::Parsed(_)));
    assert!(store.is_empty());
}

#[test]
fn test_apply_server_errors_surface_verbatim() {
    let stub = StubBackend {
        parse_response: parse_response(&[]),
        apply_response: ApplyResponse {
            ok: true,
            errors: vec!["bad env".to_string(), "bad compose".to_string()],
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bridge = Bridge::new(&stub, Memory::new());

    bridge.parse(COMPOSE, "").unwrap();
    match bridge.apply(COMPOSE, "") {
        Err(Error::Backend(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected backend error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_generate_without_modes_never_calls_backend() {
    let stub = StubBackend::default();
    let mut bridge = Bridge::new(&stub, Memory::new());
    let form = GeneratorForm::with_catalog();

    assert!(matches!(
        bridge.generate(&form),
        Err(Error::NoModeSelected)
    ));
    assert_eq!(*stub.generate_calls.borrow(), 0);
}

#[test]
fn test_resume_with_unknown_token_is_noop() {
    let stub = StubBackend::default();
    let mut bridge = Bridge::new(&stub, Memory::new());
    let mut form = GeneratorForm::with_catalog();

    assert!(!bridge.resume(&mut form, "never-issued").unwrap());
    assert!(form.selected_modes().is_empty());
}
